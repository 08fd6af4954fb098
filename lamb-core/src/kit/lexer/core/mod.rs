//! 字符级基础设施：位置与游标

mod cursor;
mod position;

pub use cursor::SourceCursor;
pub use position::SourcePosition;

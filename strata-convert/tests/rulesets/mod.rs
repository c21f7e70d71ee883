//! Rule set tests, one module per built-in block type.

mod list;

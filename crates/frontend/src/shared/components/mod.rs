pub mod code_editor;
pub mod generic_table;
pub mod search_input;
pub mod typography;

pub use code_editor::{CodeEditor, CodePresets};
pub use generic_table::GenericTable;
pub use search_input::SearchInput;
pub use typography::{HeadingTag, SubTitle};

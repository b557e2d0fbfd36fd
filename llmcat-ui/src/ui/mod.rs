pub mod code_block;
pub mod markup;
pub mod syntax_highlight;

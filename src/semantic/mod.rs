//semantic translation, AST to intermediate code

pub mod semantic_translator;

pub use semantic_translator::SemanticTranslator;

/// AST (Abstract Syntax Tree) module
/// Contains the uniform node structure produced by the parser
///
/// Submodules:
/// - ast: The node type, its kinds, and tree rendering helpers
pub mod ast;

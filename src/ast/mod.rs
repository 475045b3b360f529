/// Parse tree module
/// Contains all definitions related to the parse tree structure
///
/// Submodules:
/// - ast: The program root and the statement variants
/// - expressions: Additions and their terms
/// - statements: One node per statement production
pub mod ast;
pub mod expressions;
pub mod statements;

/*
*                    pl0fe -- PL/0 front end.
*
* program    = block "." ;
* block      = [ "VAR" ident { "," ident } ";" ]
*              [ "CONST" ident "=" number { "," ident "=" number } ";" ]
*              { "PROCEDURE" ident ";" block ";" } statement ;
* statement  = [ ident "=" expression
*              | "CALL" ident
*              | "READ" ident
*              | "PRINT" expression
*              | "BEGIN" statement { ";" statement } "END"
*              | "IF" condition "THEN" statement
*              | "WHILE" condition "DO" statement
*              | "PASS" ] ;
* condition  = "ODD" expression | expression comparator expression ;
* expression = [ "-" ] term { ( "+" | "-" ) term } ;
* term       = factor { ( "*" | "/" ) factor } ;
* factor     = ident | number | "(" expression ")" ;
* comparator = "<" | ">" | "==" | "!=" | "<=" | ">=" ;
*/

mod block;
mod expressions;
mod statements;
mod visitor;

pub use block::Block;
pub use expressions::{ArithOp, Expression, RelOp, UnaryOp};
pub use statements::{CallOrReadKind, Statement};
pub use visitor::{walk_block, walk_expression, walk_statement, ASTVisitor, NodeCounter};

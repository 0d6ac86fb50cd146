use pl0fe::ast::{
    walk_statement, ASTVisitor, ArithOp, Block, CallOrReadKind, Expression, NodeCounter, RelOp,
    Statement,
};
use pl0fe::errors::Pl0Result;
use pl0fe::ir::TempNames;
use pl0fe::parse_source;
use pl0fe::utils::config::parser::ParserConfig;

fn add(left: Expression, right: Expression) -> Expression {
    Expression::arithmetic(ArithOp::Add, left, right)
}

#[test]
fn test_sequence_folds_to_the_right() {
    let stmts = vec![Statement::read("a"), Statement::call("p"), Statement::Pass];
    assert_eq!(
        Statement::sequence(stmts),
        Statement::seq(
            Statement::read("a"),
            Statement::seq(Statement::call("p"), Statement::Pass)
        )
    );
    assert_eq!(Statement::sequence(vec![Statement::call("p")]), Statement::call("p"));
    assert_eq!(Statement::sequence(Vec::new()), Statement::Pass);
}

#[test]
fn test_call_and_read_share_a_node() {
    match Statement::read("x") {
        Statement::CallOrRead { kind, name } => {
            assert_eq!(kind, CallOrReadKind::Read);
            assert_eq!(name, "x");
        }
        other => panic!("Expected CallOrRead, found: {:?}", other),
    }
    assert_ne!(Statement::read("x"), Statement::call("x"));
}

#[test]
fn test_block_accessors() {
    let block = Block::with_procedures(
        vec![
            ("p".to_string(), Block::Statement(Statement::Pass)),
            ("q".to_string(), Block::Statement(Statement::call("p"))),
        ],
        Statement::call("q"),
    );
    assert_eq!(
        block,
        Block::procedure(
            "p",
            Block::Statement(Statement::Pass),
            Block::procedure(
                "q",
                Block::Statement(Statement::call("p")),
                Block::Statement(Statement::call("q"))
            )
        )
    );
    let names: Vec<&str> = block.procedures().iter().map(|(name, _)| *name).collect();
    assert_eq!(names, vec!["p", "q"]);
    assert_eq!(*block.statement(), Statement::call("q"));

    let plain = Block::with_procedures(Vec::new(), Statement::Pass);
    assert_eq!(plain, Block::Statement(Statement::Pass));
    assert!(plain.procedures().is_empty());
}

#[test]
fn test_expression_children_and_conditions() {
    let sum = add(Expression::identifier("a"), Expression::number(1));
    assert_eq!(sum.children().len(), 2);
    assert!(!sum.is_condition());
    assert!(Expression::number(3).children().is_empty());

    let odd = Expression::odd(sum.clone());
    assert!(odd.is_condition());
    assert_eq!(odd.children(), vec![&sum]);
    assert!(Expression::relation(RelOp::Lt, sum.clone(), Expression::number(0)).is_condition());
}

#[test]
fn test_expression_display() {
    let expr = Expression::arithmetic(
        ArithOp::Mul,
        add(Expression::negate(Expression::identifier("a")), Expression::number(2)),
        Expression::identifier("b"),
    );
    assert_eq!(expr.to_string(), "((-a + 2) * b)");

    let cond = Expression::relation(RelOp::Ne, Expression::identifier("x"), Expression::number(0));
    assert_eq!(cond.to_string(), "x != 0");
    assert_eq!(Expression::odd(Expression::identifier("x")).to_string(), "ODD x");
}

#[test]
fn test_tree_display() -> Pl0Result<()> {
    let outcome = parse_source(
        "VAR x; PROCEDURE p; WHILE x > 0 DO x = x - 1; BEGIN READ x; CALL p; PRINT x END.",
        ParserConfig::default(),
    )?;
    let expected = "\
PROCEDURE p;
    WHILE x > 0 DO
        x = (x - 1)
READ x
CALL p
PRINT x
";
    assert_eq!(outcome.block.to_string(), expected);
    Ok(())
}

#[test]
fn test_node_counter() -> Pl0Result<()> {
    let outcome = parse_source(
        "VAR x; PROCEDURE p; PASS; BEGIN x = x + 1; CALL p END.",
        ParserConfig::default(),
    )?;
    let counter = NodeCounter::count(&outcome.block)?;
    // procedure node, its body, the continuation
    assert_eq!(counter.blocks, 3);
    // PASS, the sequence, the assignment, the call
    assert_eq!(counter.statements, 4);
    // x + 1 with its two operands
    assert_eq!(counter.expressions, 3);
    assert_eq!(counter.total(), 10);
    Ok(())
}

#[derive(Default)]
struct AssignedNames(Vec<String>);

impl ASTVisitor for AssignedNames {
    fn visit_statement(&mut self, stmt: &Statement) -> Pl0Result<()> {
        if let Statement::Assign { name, .. } = stmt {
            self.0.push(name.clone());
        }
        walk_statement(self, stmt)
    }
}

#[test]
fn test_custom_visitor_overrides_one_node() -> Pl0Result<()> {
    let outcome = parse_source(
        "VAR a, b; PROCEDURE p; b = 2; BEGIN a = 1; IF a > 0 THEN b = a END.",
        ParserConfig::default(),
    )?;
    let mut names = AssignedNames::default();
    outcome.block.accept(&mut names)?;
    assert_eq!(names.0, vec!["b", "a", "b"]);
    Ok(())
}

#[test]
fn test_temp_names() {
    let mut temps = TempNames::new();
    assert_eq!(temps.fresh(), "t0");
    assert_eq!(temps.fresh(), "t1");
    assert_eq!(temps.fresh(), "t2");
    assert_eq!(temps.issued(), 3);
    temps.reset();
    assert_eq!(temps.issued(), 0);
    assert_eq!(temps.fresh(), "t0");
}

use clap::Parser;
use log::{info, LevelFilter};
use pl0fe::{
    ast::{Block, NodeCounter},
    frontend::{lexer::scan, Token},
    read,
    semantic::SymbolTable,
    utils::config::parser::{ParserConfig, DEFAULT_MAX_DEPTH},
    utils::errors::Pl0Result,
    LineNumber,
};
use std::{path::PathBuf, time::Instant};

#[derive(Parser)]
#[command(
    author,
    version,
    about = "PL/0 front end: scanning, scope checked parsing and AST construction",
    long_about = "PL/0 front end.\n\
                 Scans a PL/0 source file, parses it with scope checked symbol\n\
                 resolution and builds the abstract syntax tree.\n\
                 \n\
                 Example usage:\n\
                 pl0fe input.pl0                 # Check the program\n\
                 pl0fe input.pl0 --show-tokens   # Print the token stream\n\
                 pl0fe input.pl0 --show-ast      # Print the syntax tree\n\
                 pl0fe input.pl0 --timing        # Show phase timing"
)]
struct Cli {
    // The path to the file to check
    path: PathBuf,

    // Print the token stream after scanning
    #[arg(long)]
    show_tokens: bool,

    // Show AST after parsing
    #[arg(long)]
    show_ast: bool,

    // Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    // Show phase timing
    #[arg(short, long)]
    timing: bool,

    // Deepest allowed nesting of blocks, statements and expressions
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,
}

#[derive(Debug, Default)]
struct CompilationStats {
    lexer_time: f64,
    parser_time: f64,
    total_time: f64,
    token_count: usize,
    ast_size: usize,
}

// Print error message and exit with error code
fn fatal(msg: &str) -> ! {
    eprintln!("Error: {}", msg);
    std::process::exit(1);
}

// Perform lexical analysis phase
fn lexical_analysis(source: &str, stats: &mut CompilationStats) -> Pl0Result<Vec<(Token, usize)>> {
    let lexer_start = Instant::now();
    let mut state = LineNumber::default();
    let tokens = scan(&mut state, source)?;
    stats.lexer_time = lexer_start.elapsed().as_secs_f64();
    stats.token_count = tokens.len();
    info!("lexical analysis completed in {:.3}s", stats.lexer_time);
    Ok(tokens)
}

// Perform parsing phase
fn parsing_phase(
    tokens: Vec<(Token, usize)>,
    config: ParserConfig,
    stats: &mut CompilationStats,
) -> Pl0Result<Block> {
    let parser_start = Instant::now();
    let mut table = SymbolTable::new();
    let mut parser = pl0fe::frontend::Parser::with_config(tokens, config);
    let ast = parser.parse_program(&mut table)?;
    stats.parser_time = parser_start.elapsed().as_secs_f64();
    stats.ast_size = NodeCounter::count(&ast)?.total();
    info!("parsing completed in {:.3}s", stats.parser_time);
    Ok(ast)
}

fn compile(args: &Cli) -> Pl0Result<CompilationStats> {
    let start_time = Instant::now();
    let mut stats = CompilationStats::default();

    let source = read(&args.path)?;
    info!("read {} bytes from {}", source.len(), args.path.display());

    let tokens = lexical_analysis(&source, &mut stats)?;
    if args.show_tokens {
        println!("\n Tokens:");
        for (token, line) in &tokens {
            println!("  {:>4}  {}", line, token);
        }
    }

    let config = ParserConfig {
        max_depth: args.max_depth,
    };
    let ast = parsing_phase(tokens, config, &mut stats)?;
    if args.show_ast {
        println!("\n Abstract Syntax Tree:");
        print!("{}", ast);
    }

    stats.total_time = start_time.elapsed().as_secs_f64();
    Ok(stats)
}

// Print detailed compilation statistics
fn print_stats(stats: &CompilationStats) {
    println!("\n Compilation Statistics:");
    println!("  Lexical Analysis   {:>8.3}s", stats.lexer_time);
    println!("  Parsing            {:>8.3}s", stats.parser_time);
    println!("  Total Time         {:>8.3}s", stats.total_time);
    println!("  Tokens:            {}", stats.token_count);
    println!("  AST Nodes:         {}", stats.ast_size);
}

fn main() {
    let args = Cli::parse();

    let level = if args.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    match compile(&args) {
        Ok(stats) => {
            if args.timing {
                print_stats(&stats);
            }
            println!("Successful!");
        }
        Err(e) => fatal(&e.to_string()),
    }
}

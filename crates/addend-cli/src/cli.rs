//! Command line arguments

use addend::{Coercion, Operand, Overflow, SumContext};
use anyhow::{Context, Result};
use clap::Parser;

/// Add numbers and numeric strings.
#[derive(Parser, Debug, Clone)]
#[command(name = "addend", version)]
#[command(about = "Add numbers and numeric strings")]
pub struct Cli {
    /// Operands, each read as numeric text (blank text counts as 0)
    #[arg(allow_hyphen_values = true)]
    pub operands: Vec<String>,

    /// Comma-separated Rust literals appended to the operands, e.g. '1, -2.5, "3"'
    #[arg(short, long = "expr", value_name = "LIST")]
    pub exprs: Vec<String>,

    /// Fail on operands that are not numbers instead of yielding NaN
    #[arg(long)]
    pub strict: bool,

    /// Fail on integer overflow instead of widening to floating point
    #[arg(long)]
    pub no_widen: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Cli {
    /// Build the summation context from the flags.
    pub fn context(&self) -> SumContext {
        let coercion = if self.strict {
            Coercion::Strict
        } else {
            Coercion::Lenient
        };
        let overflow = if self.no_widen {
            Overflow::Error
        } else {
            Overflow::Widen
        };
        SumContext::new()
            .with_coercion(coercion)
            .with_overflow(overflow)
            .with_trace(self.verbose)
    }

    /// Collect positional operands followed by every `--expr` list, in order.
    pub fn collect_operands(&self) -> Result<Vec<Operand>> {
        let mut operands: Vec<Operand> = self.operands.iter().map(Operand::from).collect();
        for src in &self.exprs {
            let parsed = addend::parse_operands(src)
                .with_context(|| format!("invalid operand list {:?}", src))?;
            operands.extend(parsed);
        }
        Ok(operands)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("addend").chain(args.iter().copied()))
            .expect("arguments should parse")
    }

    #[test]
    fn test_positional_operands() {
        let cli = parse(&["1", "2", "-3"]);
        assert_eq!(cli.operands, vec!["1", "2", "-3"]);
        assert_eq!(
            cli.collect_operands().unwrap(),
            vec![Operand::text("1"), Operand::text("2"), Operand::text("-3")]
        );
    }

    #[test]
    fn test_hyphenated_numeric_operands() {
        let cli = parse(&["-Infinity", "-.5", "-1e3"]);
        assert_eq!(cli.operands, vec!["-Infinity", "-.5", "-1e3"]);
        assert!(!cli.verbose);
    }

    #[test]
    fn test_flags_before_hyphenated_operands() {
        let cli = parse(&["--strict", "-.5", "1"]);
        assert!(cli.strict);
        assert_eq!(cli.operands, vec!["-.5", "1"]);
    }

    #[test]
    fn test_expr_lists_follow_positionals() {
        let cli = parse(&["--expr", "2, 3.5", "--expr", "\"4\"", "1"]);
        assert_eq!(
            cli.collect_operands().unwrap(),
            vec![
                Operand::text("1"),
                Operand::Int(2),
                Operand::Float(3.5),
                Operand::text("4"),
            ]
        );
    }

    #[test]
    fn test_bad_expr_list() {
        let cli = parse(&["--expr", "1 +"]);
        let err = cli.collect_operands().unwrap_err();
        assert!(err.to_string().contains("invalid operand list"));
    }

    #[test]
    fn test_context_flags() {
        let ctx = parse(&[]).context();
        assert_eq!(ctx.coercion, Coercion::Lenient);
        assert_eq!(ctx.overflow, Overflow::Widen);

        let ctx = parse(&["--strict", "--no-widen", "--verbose"]).context();
        assert_eq!(ctx.coercion, Coercion::Strict);
        assert_eq!(ctx.overflow, Overflow::Error);
        assert!(ctx.trace);
    }
}

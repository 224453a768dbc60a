//! `calc`: evaluate a simple arithmetic expression.
//!
//! Supports + - * / % ^ (right-associative), parentheses and unary minus
//! over f64, via a small recursive-descent parser.

use crate::command::{Command, CommandResult};
use crate::error::CommandError;

pub struct CalcCommand;

impl Command for CalcCommand {
    fn name(&self) -> &str {
        "calc"
    }

    fn description(&self) -> &str {
        "Calculates a simple math expression"
    }

    fn usage(&self) -> Option<&str> {
        Some("<expression>")
    }

    fn author(&self) -> Option<&str> {
        Some("TheBiochemic")
    }

    fn run(&self, args: &[&str]) -> CommandResult {
        // Spaces are insignificant: "1 + 2" and "1+2" are the same input.
        let expression: String = args.concat();
        if expression.is_empty() {
            return Err(CommandError::usage());
        }
        let value = evaluate(&expression)
            .ok_or_else(|| CommandError::usage_with("This is not a valid expression!"))?;
        if !value.is_finite() {
            return Err(CommandError::usage_with("This is not a valid expression!"));
        }
        Ok(Some(format_number(value)))
    }
}

fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

/// Evaluate `input`, `None` on any syntax error or trailing garbage.
pub fn evaluate(input: &str) -> Option<f64> {
    let mut parser = Parser {
        chars: input.chars().filter(|c| !c.is_whitespace()).collect(),
        pos: 0,
    };
    let value = parser.expr()?;
    if parser.pos != parser.chars.len() {
        return None;
    }
    Some(value)
}

struct Parser {
    chars: Vec<char>,
    pos: usize,
}

impl Parser {
    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += 1;
        Some(c)
    }

    fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn expr(&mut self) -> Option<f64> {
        let mut value = self.term()?;
        loop {
            if self.eat('+') {
                value += self.term()?;
            } else if self.eat('-') {
                value -= self.term()?;
            } else {
                return Some(value);
            }
        }
    }

    fn term(&mut self) -> Option<f64> {
        let mut value = self.power()?;
        loop {
            if self.eat('*') {
                value *= self.power()?;
            } else if self.eat('/') {
                value /= self.power()?;
            } else if self.eat('%') {
                value %= self.power()?;
            } else {
                return Some(value);
            }
        }
    }

    fn power(&mut self) -> Option<f64> {
        let base = self.unary()?;
        if self.eat('^') {
            // Right-associative.
            let exponent = self.power()?;
            return Some(base.powf(exponent));
        }
        Some(base)
    }

    fn unary(&mut self) -> Option<f64> {
        if self.eat('-') {
            return Some(-self.unary()?);
        }
        self.primary()
    }

    fn primary(&mut self) -> Option<f64> {
        if self.eat('(') {
            let value = self.expr()?;
            if !self.eat(')') {
                return None;
            }
            return Some(value);
        }
        self.number()
    }

    fn number(&mut self) -> Option<f64> {
        let start = self.pos;
        while matches!(self.peek(), Some(c) if c.is_ascii_digit() || c == '.') {
            self.bump();
        }
        if self.pos == start {
            return None;
        }
        let text: String = self.chars[start..self.pos].iter().collect();
        text.parse().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_arithmetic() {
        assert_eq!(evaluate("1+2*3"), Some(7.0));
        assert_eq!(evaluate("(1+2)*3"), Some(9.0));
        assert_eq!(evaluate("10%3"), Some(1.0));
        assert_eq!(evaluate("2^10"), Some(1024.0));
        assert_eq!(evaluate("-4+2"), Some(-2.0));
        assert_eq!(evaluate("2^3^2"), Some(512.0));
        assert_eq!(evaluate("1.5*2"), Some(3.0));
    }

    #[test]
    fn invalid_expressions_are_rejected() {
        assert_eq!(evaluate("1+"), None);
        assert_eq!(evaluate("(1+2"), None);
        assert_eq!(evaluate("abc"), None);
        assert_eq!(evaluate("1 2"), Some(12.0)); // whitespace is stripped
        assert_eq!(evaluate("1++2"), None);
    }

    #[test]
    fn command_joins_args_and_formats() {
        assert_eq!(
            CalcCommand.run(&["1", "+", "2"]).unwrap(),
            Some("3".to_string())
        );
        assert_eq!(CalcCommand.run(&["7/2"]).unwrap(), Some("3.5".to_string()));
    }

    #[test]
    fn empty_expression_is_a_usage_error() {
        assert_eq!(CalcCommand.run(&[]).unwrap_err(), CommandError::usage());
    }

    #[test]
    fn garbage_reports_invalid_expression() {
        assert_eq!(
            CalcCommand.run(&["1+x"]).unwrap_err(),
            CommandError::usage_with("This is not a valid expression!")
        );
    }

    #[test]
    fn division_by_zero_is_rejected() {
        assert_eq!(
            CalcCommand.run(&["1/0"]).unwrap_err(),
            CommandError::usage_with("This is not a valid expression!")
        );
    }
}

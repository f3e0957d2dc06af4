//! `hxd swap`: validate and normalize an `hx-swap` expression

use anyhow::{Context, Result};
use hx_directives::htmx::SwapStrategy;

/// Parses an expression and prints it in canonical form
///
/// Repeated modifier keys collapse to their last value, so
/// `innerHTML scroll:top scroll:bottom` prints `innerHTML scroll:bottom`.
#[derive(Debug, Clone)]
pub struct SwapCommand {
    expression: String,
}

impl SwapCommand {
    /// Create a new swap command
    #[must_use]
    pub const fn new(expression: String) -> Self {
        Self { expression }
    }

    /// Normalized expression
    pub fn render(&self) -> Result<String> {
        let swap: SwapStrategy = self
            .expression
            .parse()
            .with_context(|| format!("invalid swap expression `{}`", self.expression))?;
        tracing::debug!(input = %self.expression, output = %swap, "normalized swap expression");
        Ok(swap.to_header_value())
    }

    /// Execute the command
    pub fn execute(&self) -> Result<()> {
        println!("{}", self.render()?);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalizes_repeated_keys() {
        let cmd = SwapCommand::new("innerHTML   scroll:top transition:true scroll:#log:bottom".into());
        assert_eq!(cmd.render().unwrap(), "innerHTML transition:true scroll:#log:bottom");
    }

    #[test]
    fn test_reports_invalid_expression() {
        let err = SwapCommand::new("innerHTML swap:soon".into()).render().unwrap_err();
        let message = format!("{err:#}");
        assert!(message.contains("invalid swap expression `innerHTML swap:soon`"));
        assert!(message.contains("swap:soon"));
    }
}

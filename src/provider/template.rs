use async_trait::async_trait;

use super::topic::{detect_topic, known_quantities, KNOWN_RULES};
use super::{SolutionProvider, SolutionResult, SolveError};

pub const MOCK_ANSWER: &str = "42";

/// Offline provider that fills a fixed explanation skeleton from keyword
/// checks. Output depends only on the problem text.
#[derive(Debug, Clone, Copy, Default)]
pub struct TemplateProvider;

impl TemplateProvider {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, problem: &str) -> String {
        render_solution(problem)
    }
}

#[async_trait]
impl SolutionProvider for TemplateProvider {
    fn name(&self) -> &str {
        "template"
    }

    async fn solve(&self, problem: &str) -> Result<SolutionResult, SolveError> {
        Ok(SolutionResult::new(self.render(problem)))
    }
}

fn render_solution(problem: &str) -> String {
    let mut lines = vec![
        format!("**Problem:** {problem}"),
        String::new(),
        "**Solution:**".to_string(),
        String::new(),
        format!(
            "1. **Understand the problem**: First, we need to identify what's being asked. \
             The problem appears to be about {}.",
            detect_topic(problem)
        ),
        String::new(),
        "2. **Identify known quantities**: Let's list out the given information:".to_string(),
    ];
    lines.extend(
        known_quantities(problem, KNOWN_RULES).map(|phrase| format!("   - {phrase}")),
    );
    lines.extend(
        [
            "",
            "3. **Choose appropriate formula**: Based on the problem, we should use:",
            r"   \[ F = ma \]",
            "   where:",
            r"   - \(F\) is force",
            r"   - \(m\) is mass",
            r"   - \(a\) is acceleration",
            "",
            "4. **Solve step-by-step**:",
        ]
        .map(String::from),
    );
    lines.extend(
        ["Calculate acceleration", "Apply Newton's second law", "Verify units"]
            .iter()
            .enumerate()
            .map(|(n, step)| format!("   - Step {}: {step}", n + 1)),
    );
    lines.push(String::new());
    lines.push(format!(
        "5. **Final Answer**: After calculations, we find that the solution is \
         \\boxed{{{MOCK_ANSWER}}} (mock answer for demonstration)."
    ));

    lines.join("\n")
}

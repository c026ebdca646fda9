//! Keyword rule tables used to parameterise the solution template.
//!
//! Matching is a plain case-sensitive substring check. Rules are evaluated
//! in table order.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TopicRule {
    pub pattern: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KnownRule {
    pub pattern: &'static str,
    pub present: &'static str,
    pub absent: &'static str,
}

pub const TOPIC_RULES: &[TopicRule] = &[
    TopicRule {
        pattern: "velocity",
        label: "kinematics",
    },
    TopicRule {
        pattern: "resistance",
        label: "electric circuits",
    },
];

pub const FALLBACK_TOPIC: &str = "a general physics concept";

pub const KNOWN_RULES: &[KnownRule] = &[
    KnownRule {
        pattern: "mass",
        present: "Mass (m) is provided",
        absent: "No mass mentioned",
    },
    KnownRule {
        pattern: "velocity",
        present: "Initial velocity is given",
        absent: "Velocity not specified",
    },
];

pub fn classify<'a>(problem: &str, rules: &'a [TopicRule], fallback: &'a str) -> &'a str {
    rules
        .iter()
        .find(|rule| problem.contains(rule.pattern))
        .map_or(fallback, |rule| rule.label)
}

pub fn detect_topic(problem: &str) -> &'static str {
    classify(problem, TOPIC_RULES, FALLBACK_TOPIC)
}

/// One phrase per rule in `rules`, in table order.
pub fn known_quantities<'a>(
    problem: &'a str,
    rules: &'a [KnownRule],
) -> impl Iterator<Item = &'static str> + 'a {
    rules.iter().map(move |rule| {
        if problem.contains(rule.pattern) {
            rule.present
        } else {
            rule.absent
        }
    })
}

//! Fixed lesson content: step text, checklist groups and where the diagram lives.

use crate::step::StepIndex;

/// Interactive element embedded in a step below its body text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepWidget {
    None,
    Diagram,
    Checklist(&'static ChecklistGroup),
}

#[derive(Debug, PartialEq, Eq)]
pub struct ChecklistGroup {
    /// Identifier used by `check <name>` and the assessment board.
    pub name: &'static str,
    pub items: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepContent {
    pub menu_label: &'static str,
    pub title: &'static str,
    pub body: &'static [&'static str],
    pub widget: StepWidget,
}

pub static REFLECTION: ChecklistGroup = ChecklistGroup {
    name: "reflection",
    items: &[
        "I can name a recurring problem in my team that keeps coming back",
        "I have traced that problem to at least two contributing causes",
        "I know which of those causes I can influence directly",
        "I have shared my map of the problem with someone else",
    ],
};

pub static SELF_ASSESSMENT: ChecklistGroup = ChecklistGroup {
    name: "self-assessment",
    items: &[
        "I look for patterns over time, not single events",
        "I ask how a change in one area will ripple into others",
        "I check for feedback loops before blaming individuals",
        "I consider delays between an action and its effect",
        "I involve the people closest to the work when redesigning it",
        "I measure results at the level of the whole system",
    ],
};

static STEPS: [StepContent; 6] = [
    StepContent {
        menu_label: "Introduction",
        title: "What is systems thinking?",
        body: &[
            "An organisation is not a collection of separate parts. It is a system: \
             leadership, culture, processes, people, results and customers all \
             influence one another.",
            "Systems thinking is the habit of looking at those relationships instead \
             of at isolated events. When something goes wrong, the question changes \
             from \"who did this?\" to \"what in the system made this likely?\"",
            "Use the arrow keys or the number keys to move through the six steps.",
        ],
        widget: StepWidget::None,
    },
    StepContent {
        menu_label: "Events & patterns",
        title: "From events to patterns",
        body: &[
            "Most of what we notice are events: a missed deadline, an unhappy \
             customer, a resignation. Events are the visible tip of the iceberg.",
            "Below the events are patterns: the same kind of event happening again \
             and again. Below the patterns are the structures (incentives, handoffs, \
             habits) that produce them.",
            "Lasting change happens at the level of structure, not events.",
        ],
        widget: StepWidget::None,
    },
    StepContent {
        menu_label: "Relationships",
        title: "How the parts connect",
        body: &[
            "Select a concept to see what it influences. Arrows are directed: the \
             way leadership shapes culture is not the same as the way culture \
             constrains leadership.",
        ],
        widget: StepWidget::Diagram,
    },
    StepContent {
        menu_label: "Feedback loops",
        title: "Feedback loops and delays",
        body: &[
            "A feedback loop exists when an effect travels around the system and \
             comes back to its cause. Reinforcing loops amplify change; balancing \
             loops resist it.",
            "Delays hide loops. When results arrive months after a decision, the \
             connection between them is easy to miss.",
            "Reflect on a problem from your own work:",
        ],
        widget: StepWidget::Checklist(&REFLECTION),
    },
    StepContent {
        menu_label: "Leverage points",
        title: "Finding leverage",
        body: &[
            "A leverage point is a place where a small change produces a large, \
             lasting effect. Leverage is rarely where the symptoms appear.",
            "Look for the relationships marked strong in the diagram: changing the \
             source of a strong connection moves everything downstream of it.",
        ],
        widget: StepWidget::None,
    },
    StepContent {
        menu_label: "Self-assessment",
        title: "Check your understanding",
        body: &["Tick every statement that describes how you already work."],
        widget: StepWidget::Checklist(&SELF_ASSESSMENT),
    },
];

/// Content for one step.
#[must_use]
pub fn step_content(step: StepIndex) -> &'static StepContent {
    &STEPS[step.position()]
}

/// All checklist groups, in step order.
#[must_use]
pub fn checklist_groups() -> [&'static ChecklistGroup; 2] {
    [&REFLECTION, &SELF_ASSESSMENT]
}

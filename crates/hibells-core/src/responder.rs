//! Canned-response student assistant.
//!
//! An ordered table of keyword rules evaluated top to bottom; the first rule
//! with a substring hit in the lower-cased input answers. Deterministic, no
//! external state.

/// What a rule answers about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Topic {
    Schedule,
    Exams,
    Courses,
    Campus,
    Results,
    Contacts,
}

pub struct Rule {
    pub topic: Topic,
    pub keywords: &'static [&'static str],
    pub reply: &'static str,
}

impl Rule {
    fn matches(&self, lowered: &str) -> bool {
        self.keywords.iter().any(|k| lowered.contains(k))
    }
}

/// Evaluated in declaration order; earlier rules win ties.
pub const RULES: &[Rule] = &[
    Rule {
        topic: Topic::Schedule,
        keywords: &["schedule", "timetable", "class"],
        reply: "I can help you with your academic schedule! Your next class is CSC 301 \
                (Operating Systems) at 10:00 AM in Room LT-5. Would you like me to show you \
                your full weekly timetable?",
    },
    Rule {
        topic: Topic::Exams,
        keywords: &["exam", "test"],
        reply: "Your upcoming exams: CSC 301 (June 25th), MTH 205 (June 27th). \
                I can send you reminder notifications if you'd like!",
    },
    Rule {
        topic: Topic::Courses,
        keywords: &["course", "registration", "subject"],
        reply: "Here are your registered courses: CSC 301 Operating Systems, MTH 205 Linear \
                Algebra, PHY 203 Electromagnetism, and GST 101 Use of English. Registration for \
                next session opens on the portal. Which course would you like more information about?",
    },
    Rule {
        topic: Topic::Campus,
        keywords: &["map", "location", "building", "library", "where"],
        reply: "I can help you navigate the campus! Which building or facility are you looking \
                for? Popular locations include the Library, Student Center, Cafeteria, and the \
                department buildings.",
    },
    Rule {
        topic: Topic::Results,
        keywords: &["result", "grade", "gpa"],
        reply: "Your results and GPA are published on the student portal under Academic Records. \
                Open the Portal tab and sign in to see your latest grades.",
    },
    Rule {
        topic: Topic::Contacts,
        keywords: &["contact", "lecturer", "professor"],
        reply: "Lecturer contact details and office hours are listed on each department's page \
                of the portal. Your course adviser can also put you in touch with a lecturer directly.",
    },
];

pub const FALLBACK: &str = "I can help with your class schedule, upcoming exams, course \
registration, campus locations, results and GPA, and lecturer contacts. Could you tell me \
which of these you need?";

/// The first rule matching `input`, if any
pub fn classify(input: &str) -> Option<Topic> {
    matching_rule(input).map(|r| r.topic)
}

/// The assistant's reply to `input`
pub fn respond(input: &str) -> &'static str {
    matching_rule(input).map_or(FALLBACK, |r| r.reply)
}

fn matching_rule(input: &str) -> Option<&'static Rule> {
    let lowered = input.to_lowercase();
    RULES.iter().find(|r| r.matches(&lowered))
}

//! Static content compiled into the app: news, catalog, community, academics.
//!
//! None of this is fetched; the news feed and community tab are mock data.

use crate::resource::{CatalogResource, ResourceKind};

#[derive(Debug, Clone, PartialEq)]
pub struct NewsItem {
    pub id: &'static str,
    pub title: &'static str,
    pub excerpt: &'static str,
    pub date: &'static str,
    pub url: &'static str,
    pub category: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CommunityPost {
    pub id: &'static str,
    pub author: &'static str,
    pub avatar: &'static str,
    pub content: &'static str,
    pub posted: &'static str,
    pub likes: u32,
    pub comments: u32,
    pub category: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CampusEvent {
    pub id: &'static str,
    pub title: &'static str,
    pub date: &'static str,
    pub time: &'static str,
    pub location: &'static str,
    pub attendees: u32,
    pub category: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Course {
    pub code: &'static str,
    pub title: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Exam {
    pub course_code: &'static str,
    pub date: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OnboardingStep {
    pub title: &'static str,
    pub description: &'static str,
}

pub const NEWS: &[NewsItem] = &[
    NewsItem {
        id: "1",
        title: "New Academic Calendar Released for 2024/2025 Session",
        excerpt: "The university has announced the academic calendar for the upcoming session with key dates for registration and examinations.",
        date: "2024-06-15",
        url: "https://www.bellsuniversity.edu.ng/news/academic-calendar-2024",
        category: "Academic",
    },
    NewsItem {
        id: "2",
        title: "Scholarship Opportunities Available for Outstanding Students",
        excerpt: "Applications are now open for merit-based scholarships for undergraduate and postgraduate programs.",
        date: "2024-06-12",
        url: "https://www.bellsuniversity.edu.ng/news/scholarships-2024",
        category: "Financial Aid",
    },
    NewsItem {
        id: "3",
        title: "Campus Infrastructure Development Update",
        excerpt: "Construction of new library wing and student accommodation facilities progressing on schedule.",
        date: "2024-06-10",
        url: "https://www.bellsuniversity.edu.ng/news/infrastructure-update",
        category: "Campus News",
    },
];

pub const CATALOG: &[CatalogResource] = &[
    CatalogResource {
        id: "1",
        title: "Computer Science Study Guide 2024",
        kind: ResourceKind::Pdf,
        category: "Computer Science",
        description: "Comprehensive study guide covering algorithms, data structures, and programming fundamentals.",
        url: "/resources/cs-study-guide.pdf",
        downloadable: true,
        size: Some("2.5 MB"),
    },
    CatalogResource {
        id: "2",
        title: "Mathematics Lecture Series",
        kind: ResourceKind::Video,
        category: "Mathematics",
        description: "Video lectures on calculus, linear algebra, and discrete mathematics.",
        url: "/resources/math-lectures",
        downloadable: false,
        size: None,
    },
    CatalogResource {
        id: "3",
        title: "Student Handbook 2024",
        kind: ResourceKind::Document,
        category: "General",
        description: "Official student handbook with policies, procedures, and campus information.",
        url: "/resources/student-handbook.pdf",
        downloadable: true,
        size: Some("1.8 MB"),
    },
    CatalogResource {
        id: "4",
        title: "Library Online Resources",
        kind: ResourceKind::Link,
        category: "Library",
        description: "Access to digital library, research databases, and online journals.",
        url: "https://library.bellsuniversity.edu.ng",
        downloadable: false,
        size: None,
    },
    CatalogResource {
        id: "5",
        title: "Physics Lab Manual",
        kind: ResourceKind::Pdf,
        category: "Physics",
        description: "Laboratory procedures and experiments for physics courses.",
        url: "/resources/physics-lab-manual.pdf",
        downloadable: true,
        size: Some("3.2 MB"),
    },
];

pub const POSTS: &[CommunityPost] = &[
    CommunityPost {
        id: "1",
        author: "Adebayo Olumide",
        avatar: "AO",
        content: "Great lecture on AI algorithms today! Prof. Smith really knows how to explain complex concepts. Anyone else excited about the upcoming machine learning project?",
        posted: "2 hours ago",
        likes: 12,
        comments: 5,
        category: "Academic",
    },
    CommunityPost {
        id: "2",
        author: "Chioma Nwankwo",
        avatar: "CN",
        content: "Looking for study partners for the upcoming calculus exam. Let's form a study group! Who's interested?",
        posted: "4 hours ago",
        likes: 8,
        comments: 3,
        category: "Study Group",
    },
    CommunityPost {
        id: "3",
        author: "Ibrahim Aliyu",
        avatar: "IA",
        content: "The new cafeteria menu is amazing! Finally some variety in our meal options. The grilled chicken is particularly good.",
        posted: "1 day ago",
        likes: 15,
        comments: 7,
        category: "Campus Life",
    },
];

pub const EVENTS: &[CampusEvent] = &[
    CampusEvent {
        id: "1",
        title: "Computer Science Club Meeting",
        date: "2024-06-20",
        time: "3:00 PM",
        location: "CS Building, Room 201",
        attendees: 25,
        category: "Club",
    },
    CampusEvent {
        id: "2",
        title: "Annual Science Fair",
        date: "2024-06-25",
        time: "10:00 AM",
        location: "Main Auditorium",
        attendees: 150,
        category: "Academic",
    },
    CampusEvent {
        id: "3",
        title: "Basketball Tournament",
        date: "2024-06-30",
        time: "2:00 PM",
        location: "Sports Complex",
        attendees: 80,
        category: "Sports",
    },
];

pub const COURSES: &[Course] = &[
    Course { code: "CSC 301", title: "Operating Systems" },
    Course { code: "MTH 205", title: "Linear Algebra" },
    Course { code: "PHY 203", title: "Electromagnetism" },
    Course { code: "GST 101", title: "Use of English" },
];

pub const EXAMS: &[Exam] = &[
    Exam { course_code: "CSC 301", date: "June 25th" },
    Exam { course_code: "MTH 205", date: "June 27th" },
];

pub const ONBOARDING_STEPS: &[OnboardingStep] = &[
    OnboardingStep {
        title: "Persistent Portal Access",
        description: "Access the Bells University portal seamlessly with sessions that persist across app launches.",
    },
    OnboardingStep {
        title: "Offline Saving",
        description: "Save important pages from the portal to your Resources tab and find them again anytime.",
    },
    OnboardingStep {
        title: "Student Assistant",
        description: "Get instant help with course information, schedules, and campus navigation.",
    },
    OnboardingStep {
        title: "Smart Notifications",
        description: "Never miss important deadlines, exam dates, or campus events with reminder notifications.",
    },
];

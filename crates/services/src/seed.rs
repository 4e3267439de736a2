//! Seeded club content.
//!
//! The catalog is static: events, quiz questions, showcase projects, and the
//! club's contact card. Everything passes through the validating constructors,
//! so a malformed seed fails loudly at startup instead of leaking into views.

use chrono::{NaiveDate, NaiveTime};

use club_core::model::{
    Event, EventDraft, EventId, Project, ProjectCategory, ProjectId, Question, QuestionId,
};

use crate::catalog::{ClubInfo, ClubStat, OfficeHours, SocialLink};

fn event(id: u64, title: &str, date: (i32, u32, u32), time: (u32, u32), description: &str) -> Event {
    let date = NaiveDate::from_ymd_opt(date.0, date.1, date.2).expect("seed event date is valid");
    let time = NaiveTime::from_hms_opt(time.0, time.1, 0).expect("seed event time is valid");
    EventDraft::new(title, date, time, description)
        .validate(EventId::new(id))
        .expect("seed event should validate")
}

/// The upcoming-events board.
#[must_use]
pub fn seed_events() -> Vec<Event> {
    vec![
        event(
            1,
            "HackGMU 2025",
            (2025, 11, 15),
            (9, 0),
            "48-hour hackathon bringing together the brightest minds to build \
             innovative solutions. Prizes worth ₹50,000!",
        ),
        event(
            2,
            "Web Development Bootcamp",
            (2025, 11, 20),
            (14, 0),
            "Intensive 3-day workshop covering React, Node.js, and modern web \
             development practices.",
        ),
        event(
            3,
            "Code Combat Challenge",
            (2025, 11, 25),
            (10, 0),
            "Test your coding skills in this competitive programming contest. \
             Win exciting prizes and recognition!",
        ),
        event(
            4,
            "AI & Machine Learning Workshop",
            (2025, 12, 1),
            (11, 0),
            "Deep dive into AI fundamentals, neural networks, and hands-on \
             projects using Python and TensorFlow.",
        ),
        event(
            5,
            "Mobile App Development Summit",
            (2025, 12, 8),
            (9, 30),
            "Learn to build cross-platform mobile apps with React Native and \
             Flutter. Expert speakers and live demos!",
        ),
        event(
            6,
            "Cybersecurity CTF Competition",
            (2025, 12, 15),
            (13, 0),
            "Capture The Flag event testing your security skills. Network \
             security, cryptography, and ethical hacking challenges!",
        ),
    ]
}

fn question(id: u64, prompt: &str, options: [&str; 4], correct: usize) -> Question {
    Question::new(
        QuestionId::new(id),
        prompt,
        options.iter().map(ToString::to_string).collect(),
        correct,
    )
    .expect("seed question should validate")
}

/// The fixed coding-quiz question list.
#[must_use]
pub fn seed_questions() -> Vec<Question> {
    vec![
        question(
            1,
            "What does HTML stand for?",
            [
                "Hyper Text Markup Language",
                "High Tech Modern Language",
                "Home Tool Markup Language",
                "Hyperlinks and Text Markup Language",
            ],
            0,
        ),
        question(
            2,
            "Which programming language is known as the 'language of the web'?",
            ["Python", "Java", "JavaScript", "C++"],
            2,
        ),
        question(
            3,
            "What is the correct syntax to print 'Hello World' in Python?",
            [
                "echo('Hello World')",
                "print('Hello World')",
                "printf('Hello World')",
                "console.log('Hello World')",
            ],
            1,
        ),
        question(
            4,
            "Which data structure uses LIFO (Last In First Out) principle?",
            ["Queue", "Stack", "Array", "Tree"],
            1,
        ),
        question(
            5,
            "What does CSS stand for?",
            [
                "Creative Style Sheets",
                "Cascading Style Sheets",
                "Computer Style Sheets",
                "Colorful Style Sheets",
            ],
            1,
        ),
    ]
}

fn project(
    id: u64,
    title: &str,
    description: &str,
    technologies: &[&str],
    category: ProjectCategory,
) -> Project {
    Project {
        id: ProjectId::new(id),
        title: title.to_string(),
        description: description.to_string(),
        technologies: technologies.iter().map(ToString::to_string).collect(),
        category,
    }
}

/// The member-project showcase.
#[must_use]
pub fn seed_projects() -> Vec<Project> {
    vec![
        project(
            1,
            "Campus Connect Platform",
            "A social networking platform exclusively for GMU students to connect, \
             collaborate, and share resources.",
            &["React", "Node.js", "MongoDB", "Socket.io"],
            ProjectCategory::Web,
        ),
        project(
            2,
            "AI Study Companion",
            "An AI-powered chatbot that helps students with doubt resolution and \
             personalized learning recommendations.",
            &["Python", "TensorFlow", "Flask", "NLP"],
            ProjectCategory::Ai,
        ),
        project(
            3,
            "Smart Attendance System",
            "IoT-based attendance tracking system using RFID and real-time cloud \
             synchronization.",
            &["Arduino", "Firebase", "React", "RFID"],
            ProjectCategory::Iot,
        ),
        project(
            4,
            "GMU Event Manager",
            "Comprehensive event management system for organizing and tracking club \
             activities and workshops.",
            &["Next.js", "PostgreSQL", "Prisma", "Tailwind"],
            ProjectCategory::Web,
        ),
        project(
            5,
            "Code Plagiarism Detector",
            "ML-based tool to detect code plagiarism and similarity across multiple \
             programming languages.",
            &["Python", "Scikit-learn", "FastAPI", "React"],
            ProjectCategory::Ai,
        ),
        project(
            6,
            "Library Automation Bot",
            "Mobile app with IoT integration for automated book tracking and \
             reservation in campus library.",
            &["React Native", "ESP32", "MongoDB", "MQTT"],
            ProjectCategory::Mobile,
        ),
        project(
            7,
            "Virtual Lab Simulator",
            "Interactive 3D physics and chemistry lab simulations for online \
             learning and experimentation.",
            &["Three.js", "WebGL", "React", "Node.js"],
            ProjectCategory::Web,
        ),
        project(
            8,
            "Voice-Based Navigation App",
            "Accessibility-focused mobile app with voice commands for visually \
             impaired campus navigation.",
            &["React Native", "Google Speech API", "TensorFlow", "Maps API"],
            ProjectCategory::Mobile,
        ),
        project(
            9,
            "Smart Parking System",
            "IoT solution for real-time parking space detection and reservation \
             using sensors and mobile app.",
            &["ESP8266", "React Native", "Firebase", "Ultrasonic Sensors"],
            ProjectCategory::Iot,
        ),
        project(
            10,
            "Resume Builder AI",
            "AI-powered resume generator with ATS optimization and \
             industry-specific templates.",
            &["GPT-4", "React", "Node.js", "PDF.js"],
            ProjectCategory::Ai,
        ),
        project(
            11,
            "College Placement Portal",
            "Complete placement management system connecting students, companies, \
             and placement cell.",
            &["Vue.js", "Express", "MySQL", "Redis"],
            ProjectCategory::Web,
        ),
        project(
            12,
            "Food Waste Tracker",
            "IoT-enabled system to monitor and reduce food waste in campus \
             cafeterias with analytics dashboard.",
            &["Raspberry Pi", "Python", "React", "InfluxDB"],
            ProjectCategory::Iot,
        ),
    ]
}

/// The club's identity and contact card.
#[must_use]
pub fn club_info() -> ClubInfo {
    ClubInfo {
        name: "GMU Coding Club",
        university: "GM University",
        heading: "Empowering Coders at GMU",
        tagline: "Igniting Innovation, Inspiring Transformation through Code",
        mission: "Join our vibrant community of passionate developers, innovators, \
                  and tech enthusiasts. Together, we build, learn, and shape the \
                  future of technology at GM University.",
        footer_blurb: "Empowering the next generation of developers through \
                       innovation, collaboration, and continuous learning.",
        email: "codingclub@gmu.ac.in",
        phone: "+91 98765 43210",
        address_lines: ["GM University, PB ROAD", "GM University, DAVANAGERE - 577001"],
        stats: vec![
            ClubStat {
                number: "500+",
                label: "Active Members",
            },
            ClubStat {
                number: "50+",
                label: "Events Hosted",
            },
            ClubStat {
                number: "100+",
                label: "Projects Built",
            },
        ],
        office_hours: vec![
            OfficeHours {
                days: "Monday - Friday",
                hours: "10:00 AM - 5:00 PM",
            },
            OfficeHours {
                days: "Saturday",
                hours: "10:00 AM - 2:00 PM",
            },
            OfficeHours {
                days: "Sunday",
                hours: "Closed",
            },
        ],
        socials: vec![
            SocialLink {
                label: "Facebook",
                url: "https://facebook.com/gmucodingclub",
            },
            SocialLink {
                label: "LinkedIn",
                url: "https://linkedin.com/company/gmucodingclub",
            },
            SocialLink {
                label: "Instagram",
                url: "https://instagram.com/gmucodingclub",
            },
            SocialLink {
                label: "GitHub",
                url: "https://github.com/gmucodingclub",
            },
        ],
        discord_url: "https://discord.gg/gmucodingclub",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeds_are_well_formed() {
        assert_eq!(seed_events().len(), 6);
        assert_eq!(seed_questions().len(), 5);
        assert_eq!(seed_projects().len(), 12);
    }

    #[test]
    fn seed_events_are_ordered_by_start() {
        let events = seed_events();
        for pair in events.windows(2) {
            assert!(pair[0].starts_at() < pair[1].starts_at());
        }
    }

    #[test]
    fn seed_question_answers_match_club_quiz() {
        let correct: Vec<usize> = seed_questions()
            .iter()
            .map(|q| q.correct_option())
            .collect();
        assert_eq!(correct, vec![0, 2, 1, 1, 1]);
    }

    #[test]
    fn every_showcase_category_is_represented_except_other() {
        let projects = seed_projects();
        for category in [
            club_core::model::ProjectCategory::Web,
            club_core::model::ProjectCategory::Ai,
            club_core::model::ProjectCategory::Iot,
            club_core::model::ProjectCategory::Mobile,
        ] {
            assert!(projects.iter().any(|p| p.category == category));
        }
    }
}

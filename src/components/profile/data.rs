//! Static content of the profile tabs.

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ProfileTab {
    Overview,
    Capabilities,
    Projects,
    Timeline,
    Predictions,
    Contact,
}

impl ProfileTab {
    pub const ALL: [ProfileTab; 6] = [
        Self::Overview,
        Self::Capabilities,
        Self::Projects,
        Self::Timeline,
        Self::Predictions,
        Self::Contact,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Overview => "overview",
            Self::Capabilities => "capabilities",
            Self::Projects => "projects",
            Self::Timeline => "timeline",
            Self::Predictions => "predictions",
            Self::Contact => "contact",
        }
    }
}

pub struct Capability {
    pub skill: &'static str,
    /// Percent, 0..=100.
    pub level: u8,
    pub color: &'static str,
}

pub struct Project {
    pub name: &'static str,
    pub status: &'static str,
    pub description: &'static str,
    pub tech: &'static [&'static str],
    pub impact: &'static str,
}

pub struct Job {
    pub years: &'static str,
    pub title: &'static str,
    pub company: &'static str,
    pub description: &'static str,
    pub tech: &'static [&'static str],
    pub current: bool,
    pub location: &'static str,
}

impl Job {
    /// First year of the range, shown in the timeline marker.
    pub fn start_year(&self) -> &'static str {
        self.years.split('-').next().unwrap_or(self.years)
    }
}

pub struct Prediction {
    pub topic: &'static str,
    pub prediction: &'static str,
    /// Percent, 0..=100.
    pub confidence: u8,
    pub window: &'static str,
}

pub const OVERVIEW: &[&str] = &[
    "Welcome, choom. You've jacked into my neural net. I cut through corporate ice \
     and build the digital future, one deploy at a time.",
    "Cyberpunk aesthetics, hacker ethics, relentless shipping. I turn chaos into code \
     and impossible ideas into running software.",
    "Currently architecting the next evolution of human-machine tooling while the \
     corps are still arguing about basic AI ethics.",
];

pub const LOCATION: (&str, &str) = ("37.7749° N, 122.4194° W", "Night City Financial District");

pub const BIOMETRICS: &[(&str, u8)] = &[
    ("CAFFEINE_LVL", 70),
    ("NEURAL_LINK", 85),
    ("CREATIVITY", 100),
    ("STRESS_LVL", 25),
];

pub const CAPABILITIES: &[Capability] = &[
    Capability { skill: "Full-Stack Development", level: 95, color: "#00ff00" },
    Capability { skill: "System Architecture", level: 88, color: "#00ffff" },
    Capability { skill: "AI/ML Implementation", level: 82, color: "#ff00ff" },
    Capability { skill: "DevOps & Cloud", level: 85, color: "#ffff00" },
    Capability { skill: "Blockchain Tech", level: 75, color: "#ff4444" },
    Capability { skill: "Team Leadership", level: 90, color: "#4444ff" },
];

pub const LIMITATIONS: &[&str] = &[
    "Neural rejection of legacy PHP codebases",
    "Physical incompatibility with Internet Explorer",
    "Allergic reaction to unnecessary meetings",
    "System crash when exposed to SQL injection",
    "Cognitive overload from \"make the logo bigger\" requests",
];

pub const PROJECTS: &[Project] = &[
    Project {
        name: "NEXUS_AI",
        status: "ACTIVE",
        description: "Neural interface for developer productivity",
        tech: &["Python", "TensorFlow", "React"],
        impact: "HIGH",
    },
    Project {
        name: "CRYPTOVAULT",
        status: "BETA",
        description: "Decentralized identity management",
        tech: &["Solidity", "Web3", "IPFS"],
        impact: "MEDIUM",
    },
    Project {
        name: "CLOUDFORGE",
        status: "SHIPPED",
        description: "Infrastructure automation platform",
        tech: &["Go", "Kubernetes", "AWS"],
        impact: "HIGH",
    },
];

pub const TIMELINE: &[Job] = &[
    Job {
        years: "2024",
        title: "Founder & CEO",
        company: "NeuralSync Corp",
        description: "Building the future of human-AI collaboration",
        tech: &["AI/ML", "React", "Python", "Kubernetes"],
        current: true,
        location: "Night City, CA",
    },
    Job {
        years: "2022-2024",
        title: "Senior Tech Lead",
        company: "Arasaka Digital",
        description: "Led security and neural interface development",
        tech: &["Cybersecurity", "Neural Networks", "Go", "Docker"],
        current: false,
        location: "Silicon Valley, CA",
    },
    Job {
        years: "2020-2022",
        title: "Full Stack Netrunner",
        company: "Militech Solutions",
        description: "Developed encrypted communication systems",
        tech: &["Cryptography", "Blockchain", "React", "Node.js"],
        current: false,
        location: "Neo Francisco, CA",
    },
    Job {
        years: "2018-2020",
        title: "Code Samurai",
        company: "Freelance",
        description: "Built web applications for early-stage startups",
        tech: &["JavaScript", "Python", "AWS", "PostgreSQL"],
        current: false,
        location: "Various Locations",
    },
];

pub const PREDICTIONS: &[Prediction] = &[
    Prediction {
        topic: "AI Singularity",
        prediction: "AGI breakthrough within a few years; true consciousness stays elusive for another decade",
        confidence: 78,
        window: "2027-2029",
    },
    Prediction {
        topic: "Web3 Evolution",
        prediction: "The hype fades and real utility emerges in identity and ownership verification",
        confidence: 85,
        window: "2025-2026",
    },
    Prediction {
        topic: "Dev Tools",
        prediction: "AI-assisted coding becomes standard and junior roles shift toward reviewing machine output",
        confidence: 92,
        window: "2024-2025",
    },
    Prediction {
        topic: "Remote Work",
        prediction: "VR/AR reaches a tipping point for remote collaboration",
        confidence: 67,
        window: "2026-2028",
    },
];

pub const CONTACT: &[(&str, &str)] = &[
    ("NEURAL_MAIL", "founder@nightcity.net"),
    ("ENCRYPTED_LINK", "+1.555.CYBER"),
    ("CODE_REPO", "@cyberpunk_samurai"),
    ("CORP_NET", "linkedin.com/in/neural-interface"),
    ("DARK_WEB", "@tech_ronin"),
];

/// `███████░░░ 70%`
pub fn meter(percent: u8) -> String {
    let percent = percent.min(100);
    let filled = usize::from(percent) / 10;
    format!("{}{} {}%", "█".repeat(filled), "░".repeat(10 - filled), percent)
}

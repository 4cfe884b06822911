//! Hardcoded page content. Never mutated at runtime.

pub struct Profile {
    pub name: &'static str,
    pub greeting: &'static str,
    pub bio: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub linkedin: &'static str,
    pub github: &'static str,
    pub resume: &'static str,
    pub roles: &'static [&'static str],
}

pub const PROFILE: Profile = Profile {
    name: "Aryan Yadav",
    greeting: "Hello, I'm",
    bio: "Passionate about creating elegant, high-performance applications with modern technologies. Specialized in React.js, React Native, and full-stack development.",
    email: "aryanking05644@gmail.com",
    phone: "+917737099712",
    linkedin: "https://linkedin.com",
    github: "https://github.com",
    resume: "#",
    roles: &[
        "Software Developer",
        "Full-Stack Engineer",
        "React Developer",
        "Mobile App Developer",
    ],
};

impl Profile {
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }

    pub fn tel(&self) -> String {
        format!("tel:{}", self.phone)
    }
}

pub struct Experience {
    pub title: &'static str,
    pub company: &'static str,
    pub period: &'static str,
    pub description: &'static [&'static str],
    pub skills: &'static [&'static str],
}

pub const EXPERIENCES: &[Experience] = &[
    Experience {
        title: "Software Engineer",
        company: "TechCompiler Data Systems",
        period: "May 2025 – Present",
        description: &[
            "Developed scalable and high-performance Web Applications and Mobile Apps using React.js, React Native, Node.js, MySQL, REST APIs, Azure",
            "Collaborated on backend development, API integrations, and real-time feature implementations.",
        ],
        skills: &["React.js", "React Native", "Node.js", "MySQL", "REST APIs", "Azure"],
    },
    Experience {
        title: "Software Engineer Intern",
        company: "TechCompiler Data Systems",
        period: "Dec 2024 – April 2025",
        description: &[
            "Contributed to software development lifecycle and gained hands-on experience with industry tools and practices.",
        ],
        skills: &["React.js", "Node.js", "REST APIs"],
    },
    Experience {
        title: "Full-Stack Intern",
        company: "Igniter's Hub, Noida",
        period: "June 2023 – Aug 2023",
        description: &[
            "Built and optimized RESTful APIs using SpringBoot while designing dynamic frontend interfaces in React.js.",
            "Integrated robust authentication mechanisms and managed secure database operations with MySQL.",
        ],
        skills: &["SpringBoot", "React.js", "RESTful APIs", "MySQL", "Authentication"],
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SkillCategory {
    Languages,
    Frontend,
    Backend,
    Mobile,
    Database,
    Tools,
}

impl SkillCategory {
    pub const ALL: [Self; 6] = [
        Self::Languages,
        Self::Frontend,
        Self::Backend,
        Self::Mobile,
        Self::Database,
        Self::Tools,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Languages => "Languages",
            Self::Frontend => "Frontend",
            Self::Backend => "Backend",
            Self::Mobile => "Mobile",
            Self::Database => "Database",
            Self::Tools => "Tools",
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            Self::Languages => "📝",
            Self::Frontend => "🎨",
            Self::Backend => "⚙️",
            Self::Mobile => "📱",
            Self::Database => "🗄️",
            Self::Tools => "🛠️",
        }
    }

    fn skills(self) -> &'static [Skill] {
        match self {
            Self::Languages => LANGUAGE_SKILLS,
            Self::Frontend => FRONTEND_SKILLS,
            Self::Backend => BACKEND_SKILLS,
            Self::Mobile => MOBILE_SKILLS,
            Self::Database => DATABASE_SKILLS,
            Self::Tools => TOOL_SKILLS,
        }
    }
}

const LANGUAGE_SKILLS: &[Skill] = &[
    Skill::new("JavaScript", 90),
    Skill::new("TypeScript", 85),
    Skill::new("Java", 80),
    Skill::new("Python", 75),
];

const FRONTEND_SKILLS: &[Skill] = &[
    Skill::new("React.js", 95),
    Skill::new("HTML5", 90),
    Skill::new("CSS3", 90),
    Skill::new("Material-UI", 85),
    Skill::new("Next.js", 80),
];

const BACKEND_SKILLS: &[Skill] = &[
    Skill::new("Node.js", 85),
    Skill::new("Express.js", 85),
    Skill::new("Spring Boot", 80),
];

const MOBILE_SKILLS: &[Skill] = &[Skill::new("React Native", 90)];

const DATABASE_SKILLS: &[Skill] = &[Skill::new("MySQL", 85), Skill::new("MongoDB", 80)];

const TOOL_SKILLS: &[Skill] = &[
    Skill::new("Git", 90),
    Skill::new("VS Code", 95),
    Skill::new("Postman", 90),
    Skill::new("REST APIs", 90),
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    proficiency: u8,
}

impl Skill {
    const fn new(name: &'static str, proficiency: u8) -> Self {
        let proficiency = if proficiency > 100 { 100 } else { proficiency };
        Self { name, proficiency }
    }

    pub fn proficiency(self) -> u8 {
        self.proficiency
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SkillFilter {
    #[default]
    All,
    Only(SkillCategory),
}

impl SkillFilter {
    pub fn options() -> impl Iterator<Item = SkillFilter> {
        std::iter::once(Self::All).chain(SkillCategory::ALL.into_iter().map(Self::Only))
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All Skills",
            Self::Only(category) => category.label(),
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            Self::All => "✨",
            Self::Only(category) => category.emoji(),
        }
    }
}

/// Every skill in category order, or one category's skills.
pub fn skills_in(filter: SkillFilter) -> Vec<Skill> {
    match filter {
        SkillFilter::All => SkillCategory::ALL
            .into_iter()
            .flat_map(|category| category.skills().iter().copied())
            .collect(),
        SkillFilter::Only(category) => category.skills().to_vec(),
    }
}

pub struct Project {
    pub title: &'static str,
    pub summary: &'static str,
    pub details: &'static str,
    pub image: &'static str,
    pub technologies: &'static [&'static str],
    pub demo_link: &'static str,
    pub code_link: &'static str,
}

impl Project {
    pub fn tech_summary(&self) -> String {
        let mut summary = self
            .technologies
            .iter()
            .take(3)
            .copied()
            .collect::<Vec<_>>()
            .join(", ");
        if self.technologies.len() > 3 {
            summary.push_str("...");
        }
        summary
    }
}

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Online Auction Platform",
        summary: "A real-time bidding platform enabling live auctions with automatic bid handling. Features secure authentication, real-time updates, and intuitive UI.",
        details: "Developed a real-time bidding platform enabling live auctions with automatic bid handling. Implemented Socket.IO for instantaneous updates. Integrated advanced security measures, including JWT-based authentication and multi-factor verification.",
        image: "/previews/auction.svg",
        technologies: &["Node.js", "React.js", "MySQL", "Socket.IO", "WebSockets", "JWT"],
        demo_link: "#",
        code_link: "#",
    },
    Project {
        title: "Task Management Mobile App",
        summary: "A comprehensive task management app with push notifications, real-time sync, and offline support.",
        details: "Developed a comprehensive task management app featuring push notifications, real-time sync, and offline support. Designed an intuitive dashboard for task analytics and performance tracking. Leveraged third-party APIs to integrate calendar and notification functionalities.",
        image: "/previews/tasks.svg",
        technologies: &["React Native", "REST APIs", "Azure SQL", "Node.js", "JWT"],
        demo_link: "#",
        code_link: "#",
    },
    Project {
        title: "Real-Time Currency Converter",
        summary: "A responsive currency converter with live exchange rate API integration and optimized performance.",
        details: "Built a responsive currency converter with live exchange rate API integration. Developed comprehensive unit and integration tests to ensure high reliability and performance. Employed caching strategies to reduce API latency. Designed a clean, adaptive UI with Thymeleaf for multi-device compatibility.",
        image: "/previews/currency.svg",
        technologies: &["Spring Boot", "Thymeleaf", "Hibernate", "MySQL", "REST APIs"],
        demo_link: "#",
        code_link: "#",
    },
    Project {
        title: "Sign Language Video Call",
        summary: "A real-time sign language translation system for video calls using AI and machine learning.",
        details: "Developed a real-time sign language translation system for video calls. Trained a deep learning model to detect hand gestures and convert them to text. Integrated WebRTC for low-latency video communication. Optimized server performance for real-time inference.",
        image: "/previews/sign-language.svg",
        technologies: &["Python", "TensorFlow", "Next.js", "WebRTC"],
        demo_link: "#",
        code_link: "#",
    },
];

pub struct Certification {
    pub name: &'static str,
    pub issuer: &'static str,
    pub year: &'static str,
}

pub struct Education {
    pub degree: &'static str,
    pub institution: &'static str,
    pub period: &'static str,
    pub cgpa: &'static str,
    pub achievements: &'static [&'static str],
    pub certifications: &'static [Certification],
}

pub const EDUCATION: Education = Education {
    degree: "B.Tech in Computer Science & Engineering",
    institution: "Govt. Engineering College, Ajmer",
    period: "2020 – 2024",
    cgpa: "8.0",
    achievements: &[
        "Single Person to Qualify for the Regional Mathematics Olympiad (RMO) in the whole district",
    ],
    certifications: &[Certification {
        name: "Java Development Internship",
        issuer: "Igniter's Hub",
        year: "2023",
    }],
};

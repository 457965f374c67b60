//! Built-in sample configuration, used by `--quick` and whenever no config
//! file can be read.

use indexmap::IndexMap;

use crate::types::{
    Education, Experience, Language, PersonalInfo, PortfolioConfig, Project, StyleConfig,
};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

impl PortfolioConfig {
    /// The sample profile. Built fresh on every call.
    pub fn sample() -> Self {
        let social_links: IndexMap<String, String> = [
            ("GitHub", "https://github.com/alexjohnson"),
            ("LinkedIn", "https://linkedin.com/in/alexjohnson"),
            ("Twitter", "https://twitter.com/alexjohnson"),
            ("Instagram", "https://instagram.com/alexjohnson"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        let skills: IndexMap<String, Vec<String>> = [
            ("Programming", strings(&["Python", "JavaScript", "TypeScript", "Java"])),
            (
                "Web Development",
                strings(&["React", "Vue.js", "Django", "Flask", "FastAPI"]),
            ),
            ("Databases", strings(&["PostgreSQL", "MySQL", "MongoDB", "Redis"])),
            (
                "DevOps & Cloud",
                strings(&["Docker", "Kubernetes", "AWS", "Git", "CI/CD"]),
            ),
            (
                "Data Science",
                strings(&["Pandas", "NumPy", "Scikit-learn", "TensorFlow"]),
            ),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect();

        PortfolioConfig {
            personal_info: PersonalInfo {
                name: "Alex Johnson".to_string(),
                title: "Full Stack Developer & Data Scientist".to_string(),
                email: Some("alex.johnson@example.com".to_string()),
                phone: Some("+1 (555) 123-4567".to_string()),
                location: Some("San Francisco, CA".to_string()),
                website: Some("www.alexjohnson.dev".to_string()),
                photo_url: Some(
                    "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=400&h=400&fit=crop"
                        .to_string(),
                ),
                bio: Some(
                    "Passionate developer with 5+ years of experience building scalable web \
                     applications and data-driven solutions. Love solving complex problems and \
                     creating impactful software."
                        .to_string(),
                ),
                summary: Some(
                    "I specialize in Python, JavaScript, and cloud technologies, with a focus on \
                     creating efficient, user-friendly applications."
                        .to_string(),
                ),
            },
            social_links,
            skills,
            experience: vec![
                Experience {
                    title: "Senior Software Engineer".to_string(),
                    company: "Tech Innovations Inc.".to_string(),
                    location: Some("San Francisco, CA".to_string()),
                    period: "2022 - Present".to_string(),
                    description: "Lead development of microservices architecture, improved system \
                                  performance by 40%, mentored junior developers, implemented \
                                  CI/CD pipelines."
                        .to_string(),
                    achievements: strings(&[
                        "Reduced API response time by 60%",
                        "Increased test coverage to 90%",
                        "Led migration to cloud infrastructure",
                    ]),
                },
                Experience {
                    title: "Full Stack Developer".to_string(),
                    company: "Digital Solutions Ltd.".to_string(),
                    location: Some("New York, NY".to_string()),
                    period: "2020 - 2022".to_string(),
                    description: "Developed and maintained multiple web applications, \
                                  collaborated with design teams, implemented responsive designs."
                        .to_string(),
                    achievements: strings(&[
                        "Built 10+ client projects",
                        "Improved site performance scores",
                        "Implemented automated testing",
                    ]),
                },
            ],
            education: vec![
                Education {
                    degree: "Master of Science in Computer Science".to_string(),
                    institution: "Stanford University".to_string(),
                    location: Some("Stanford, CA".to_string()),
                    period: "2018 - 2020".to_string(),
                    gpa: Some("3.8/4.0".to_string()),
                },
                Education {
                    degree: "Bachelor of Software Engineering".to_string(),
                    institution: "MIT".to_string(),
                    location: Some("Cambridge, MA".to_string()),
                    period: "2014 - 2018".to_string(),
                    gpa: Some("3.9/4.0".to_string()),
                },
            ],
            projects: vec![
                Project {
                    name: "E-commerce Platform".to_string(),
                    description: "Full-stack e-commerce solution with payment integration and \
                                  inventory management"
                        .to_string(),
                    technologies: strings(&["Django", "React", "PostgreSQL", "Stripe API"]),
                    link: Some("https://github.com/alexjohnson/ecommerce".to_string()),
                    github: Some("https://github.com/alexjohnson/ecommerce".to_string()),
                },
                Project {
                    name: "Task Management App".to_string(),
                    description: "Productivity application with real-time collaboration features"
                        .to_string(),
                    technologies: strings(&["FastAPI", "Vue.js", "WebSockets", "Redis"]),
                    link: Some("https://taskapp.demo.com".to_string()),
                    github: Some("https://github.com/alexjohnson/taskapp".to_string()),
                },
                Project {
                    name: "Weather Dashboard".to_string(),
                    description: "Real-time weather monitoring dashboard with analytics"
                        .to_string(),
                    technologies: strings(&["Python", "JavaScript", "Chart.js", "OpenWeather API"]),
                    link: Some("https://weather.alexjohnson.dev".to_string()),
                    github: Some("https://github.com/alexjohnson/weather-dash".to_string()),
                },
            ],
            certifications: strings(&[
                "AWS Certified Solutions Architect",
                "Google Professional Data Engineer",
                "Python Institute PCAP",
                "Docker Certified Associate",
            ]),
            languages: vec![
                Language { name: "English".to_string(), level: "Native".to_string() },
                Language { name: "Spanish".to_string(), level: "Fluent".to_string() },
                Language { name: "French".to_string(), level: "Intermediate".to_string() },
            ],
            style: StyleConfig::default(),
        }
    }
}

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct SocialLink {
    pub platform: String,
    pub url: String,
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Role {
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct AboutBlock {
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub download_link: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ServiceItem {
    pub title: String,
    pub description: String,
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ServicesBlock {
    pub title: String,
    pub items: Vec<ServiceItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioItem {
    pub title: String,
    pub image_url: String,
    pub website_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PortfolioBlock {
    pub title: String,
    pub items: Vec<PortfolioItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Testimonial {
    pub quote: String,
    pub client_name: String,
    pub profession: String,
    pub profile_pic: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct TestimonialsBlock {
    pub title: String,
    pub items: Vec<Testimonial>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ResumeBlock {
    pub title: String,
    pub description: String,
    pub download_link: String,
}

/// The single portfolio profile document. Created out-of-band; this
/// service only ever reads the most recently created one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub profile_pic: String,
    pub name: String,
    pub hero_title: String,
    pub description: String,
    pub social_links: Vec<SocialLink>,
    pub roles: Vec<Role>,
    pub about: AboutBlock,
    pub services: ServicesBlock,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub portfolio: Option<PortfolioBlock>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub testimonials: Option<TestimonialsBlock>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resume: Option<ResumeBlock>,
}

impl PortfolioProfile {
    /// The fixed document served whenever storage is unreachable or holds
    /// no profile yet.
    #[must_use]
    pub fn fallback() -> Self {
        let social = |platform: &str, url: &str, icon: &str| SocialLink {
            platform: platform.to_string(),
            url: url.to_string(),
            icon: icon.to_string(),
        };
        let role = |title: &str| Role {
            title: title.to_string(),
        };
        let service = |title: &str, description: &str, icon: &str| ServiceItem {
            title: title.to_string(),
            description: description.to_string(),
            icon: icon.to_string(),
        };
        Self {
            id: None,
            profile_pic: "profile.jpg".to_string(),
            name: "Faisal".to_string(),
            hero_title: "Hello I'm Faisal".to_string(),
            description: "Professional Web Developer & MERN Stack Specialist".to_string(),
            social_links: vec![
                social("facebook", "https://facebook.com", "fab fa-facebook"),
                social("twitter", "https://twitter.com", "fab fa-twitter"),
                social("instagram", "https://instagram.com", "fab fa-instagram"),
                social("linkedin", "https://linkedin.com", "fab fa-linkedin"),
            ],
            roles: vec![
                role("WEB DEVELOPER"),
                role("MERN STACK DEVELOPER"),
                role("SOFTWARE DEVELOPER"),
                role("JAVA DEVELOPER"),
            ],
            about: AboutBlock {
                title: "About Me".to_string(),
                description: "I'm Faisal Khan, a first-year B.Tech CSE student at IILM \
                              University with a strong passion for web development and \
                              backend systems."
                    .to_string(),
                image_url: "faisal.jpg".to_string(),
                download_link: "cv.pdf".to_string(),
            },
            services: ServicesBlock {
                title: "My Services".to_string(),
                items: vec![
                    service(
                        "Web Development",
                        "Building responsive and modern websites.",
                        "fas fa-laptop-code",
                    ),
                    service(
                        "MERN Stack Development",
                        "Full-stack applications with MERN.",
                        "fas fa-server",
                    ),
                    service(
                        "Software Solutions",
                        "Custom software development solutions.",
                        "fas fa-cogs",
                    ),
                    service(
                        "Java Development",
                        "Robust Java applications and systems.",
                        "fab fa-java",
                    ),
                ],
            },
            portfolio: None,
            testimonials: None,
            resume: None,
        }
    }
}

/// Where a served profile came from. Callers must check provenance before
/// treating the document as stored content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileSource {
    Found(PortfolioProfile),
    Fallback(PortfolioProfile),
}

impl ProfileSource {
    #[must_use]
    pub fn provenance(&self) -> &'static str {
        match self {
            Self::Found(_) => "database",
            Self::Fallback(_) => "fallback",
        }
    }

    #[must_use]
    pub fn profile(&self) -> &PortfolioProfile {
        match self {
            Self::Found(profile) | Self::Fallback(profile) => profile,
        }
    }

    #[must_use]
    pub fn into_profile(self) -> PortfolioProfile {
        match self {
            Self::Found(profile) | Self::Fallback(profile) => profile,
        }
    }
}

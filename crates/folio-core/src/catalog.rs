//! Static display content: the profile hero and the project showcase.
//!
//! Read-only presentational data served by the relay daemon and printed
//! by the CLI. Nothing in the contact pipeline mutates this.

use serde::Serialize;

/// Mobile platform a project shipped on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Platform {
    #[serde(rename = "iOS")]
    Ios,
    Android,
}

impl Platform {
    /// Display label with vendor casing.
    pub fn label(&self) -> &'static str {
        match self {
            Platform::Ios => "iOS",
            Platform::Android => "Android",
        }
    }
}

/// One showcased project.
#[derive(Debug, Clone, Serialize)]
pub struct Project {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub full_description: &'static str,
    pub platforms: &'static [Platform],
    pub screenshots: &'static [&'static str],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_store_link: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub play_store_link: Option<&'static str>,
}

/// The profile hero content.
#[derive(Debug, Clone, Serialize)]
pub struct Profile {
    pub name: &'static str,
    pub role: &'static str,
    pub summary: &'static str,
    pub badges: &'static [&'static str],
    pub avatar: &'static str,
    pub resume: &'static str,
}

static PROFILE: Profile = Profile {
    name: "Muhammad Ali Moiz",
    role: "Mobile Application Developer — Flutter • 3 years",
    summary: "I am a Mobile Application Developer with 3 years of experience specializing in \
              Flutter. I have successfully developed and deployed 4 applications on the Apple \
              App Store and Google Play Store.",
    badges: &["Flutter", "3 yrs experience", "4 apps published"],
    avatar: "/profile-image.jpeg",
    resume: "/Muhammad_Ali_Moiz_Resume.pdf",
};

static PROJECTS: &[Project] = &[
    Project {
        id: "1",
        title: "Taskvare",
        description: "TaskVare is a task and employee management app where employees can log \
                      hours, request different types of leaves, and track progress, while admins \
                      can assign projects, split tasks, and approve or reject completed work.",
        full_description: "TaskVare is a productivity and workforce management app designed to \
                           help teams manage tasks, track hours, and streamline leave approvals. \
                           It allows employees to log their working hours, apply for different \
                           types of leaves, and stay aligned with project goals, while giving \
                           admins full control over task assignments and approvals.",
        platforms: &[Platform::Ios, Platform::Android],
        screenshots: &[
            "/projects/taskvare/screenshot1.jpeg",
            "/projects/taskvare/screenshot2.jpeg",
            "/projects/taskvare/screenshot3.jpeg",
            "/projects/taskvare/screenshot4.jpeg",
            "/projects/taskvare/screenshot5.jpeg",
            "/projects/taskvare/screenshot6.jpeg",
            "/projects/taskvare/screenshot7.jpeg",
            "/projects/taskvare/screenshot8.jpeg",
            "/projects/taskvare/screenshot9.jpeg",
        ],
        app_store_link: None,
        play_store_link: None,
    },
    Project {
        id: "2",
        title: "StackUp",
        description: "StackUp is a savings and financial tracking app that lets users set goals, \
                      link bank accounts, add payment details, and monitor progress with \
                      real-time stats and charts.",
        full_description: "StackUp is a financial management app that empowers users to set \
                           personal savings goals, link their bank accounts, and track progress \
                           seamlessly. The app makes it easy to create goals such as travel \
                           funds, emergency savings, or big purchases while providing a clear \
                           visual dashboard to monitor progress.",
        platforms: &[Platform::Ios, Platform::Android],
        screenshots: &[
            "/projects/stackup/screenshot1.jpeg",
            "/projects/stackup/screenshot2.jpeg",
            "/projects/stackup/screenshot3.jpeg",
            "/projects/stackup/screenshot4.jpeg",
            "/projects/stackup/screenshot5.jpeg",
            "/projects/stackup/screenshot6.jpeg",
        ],
        app_store_link: None,
        play_store_link: None,
    },
    Project {
        id: "3",
        title: "Foldz",
        description: "A cross-platform laundry booking app built with Flutter, featuring \
                      real-time order tracking, secure payments, and push notifications for a \
                      seamless user experience.",
        full_description: "Foldz Laundry App is a modern mobile application designed to simplify \
                           laundry services for users. It allows customers to schedule pickups, \
                           track their orders in real-time, make secure payments, and receive \
                           notifications when their laundry is ready.",
        platforms: &[Platform::Ios, Platform::Android],
        screenshots: &[
            "/projects/foldz/screenshot7.jpeg",
            "/projects/foldz/screenshot2.jpeg",
            "/projects/foldz/screenshot3.jpeg",
            "/projects/foldz/screenshot4.jpeg",
            "/projects/foldz/screenshot5.jpeg",
            "/projects/foldz/screenshot6.jpeg",
            "/projects/foldz/screenshot1.jpeg",
        ],
        app_store_link: None,
        play_store_link: None,
    },
    Project {
        id: "4",
        title: "Sac Pk",
        description: "A simple e-commerce app with cart management (add/remove), abandoned cart \
                      recovery, secure payment gateway, and Shopify integration for product sync \
                      and order tracking.",
        full_description: "SACPK is a simple yet powerful e-commerce mobile application designed \
                           for a smooth shopping experience: cart management with real-time \
                           updates, abandoned-cart reminders, an integrated payment gateway, and \
                           Shopify portal integration for product sync, inventory management, \
                           and order tracking.",
        platforms: &[Platform::Ios, Platform::Android],
        screenshots: &[
            "/projects/sacpk/screenshot2.jpeg",
            "/projects/sacpk/screenshot3.jpeg",
            "/projects/sacpk/screenshot4.jpeg",
            "/projects/sacpk/screenshot5.jpeg",
            "/projects/sacpk/screenshot6.jpeg",
            "/projects/sacpk/screenshot7.jpeg",
        ],
        app_store_link: Some("https://apps.apple.com"),
        play_store_link: Some("https://play.google.com"),
    },
];

/// The profile hero.
pub fn profile() -> &'static Profile {
    &PROFILE
}

/// The showcased projects, in display order.
pub fn projects() -> &'static [Project] {
    PROJECTS
}

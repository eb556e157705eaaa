//! Fixed demo catalogue loaded into an empty fallback store.

use investo_core::types::{ProjectStatus, UserRole};

use super::Memory;
use crate::models::field::{Field, ProjectField};
use crate::models::like::ProjectLike;
use crate::models::project::Project;
use crate::models::user::User;

const STUDENT: &str = "u-student-1";
const INVESTOR: &str = "u-investor-1";
const SARA: &str = "u-student-2";
const LINA: &str = "u-student-3";
const OMAR: &str = "u-student-4";

const USERS: &[(&str, &str, &str, UserRole)] = &[
    (STUDENT, "student@example.com", "Ali", UserRole::Student),
    (INVESTOR, "investor@example.com", "Abdulmalik", UserRole::Investor),
    (SARA, "sara@example.com", "Sara", UserRole::Student),
    (LINA, "lina@example.com", "Lina", UserRole::Student),
    (OMAR, "omar@example.com", "Omar", UserRole::Student),
];

const FIELDS: &[(&str, &str)] = &[
    ("f-ai", "AI"),
    ("f-fintech", "FinTech"),
    ("f-health", "Healthcare"),
    ("f-edu", "Education"),
    ("f-sustain", "Sustainability"),
    ("f-robotics", "Robotics"),
];

struct DemoProject {
    id: &'static str,
    author_id: &'static str,
    title: &'static str,
    description: &'static str,
    image_seed: &'static str,
    funding_goal: f64,
    current_funding: f64,
    category: &'static str,
    status: ProjectStatus,
    featured: bool,
    field_id: &'static str,
}

/// Catalogue in insertion order: the later batch (`p-11`..`p-15`) is stored
/// ahead of the first ten.
const PROJECTS: &[DemoProject] = &[
    DemoProject {
        id: "p-11",
        author_id: SARA,
        title: "Peer Tutoring Marketplace",
        description: "Connect students for on-demand peer tutoring sessions.",
        image_seed: "tutoring",
        funding_goal: 8_000.0,
        current_funding: 3_200.0,
        category: "Education",
        status: ProjectStatus::Reviewed,
        featured: true,
        field_id: "f-edu",
    },
    DemoProject {
        id: "p-12",
        author_id: OMAR,
        title: "Smart Recycling Bins",
        description: "IoT-enabled recycling bins that track usage and incentives.",
        image_seed: "recycling",
        funding_goal: 22_000.0,
        current_funding: 5_000.0,
        category: "Sustainability",
        status: ProjectStatus::Pending,
        featured: false,
        field_id: "f-sustain",
    },
    DemoProject {
        id: "p-13",
        author_id: STUDENT,
        title: "Campus Event Finder",
        description: "Discover student-run events and RSVP with friends.",
        image_seed: "events",
        funding_goal: 6_000.0,
        current_funding: 6_000.0,
        category: "Community",
        status: ProjectStatus::Funded,
        featured: true,
        field_id: "f-ai",
    },
    DemoProject {
        id: "p-14",
        author_id: LINA,
        title: "Sleep Cycle Coach",
        description: "Wearable-linked app that coaches students to healthier sleep habits.",
        image_seed: "sleep",
        funding_goal: 15_000.0,
        current_funding: 7_300.0,
        category: "HealthTech",
        status: ProjectStatus::Pending,
        featured: false,
        field_id: "f-health",
    },
    DemoProject {
        id: "p-15",
        author_id: SARA,
        title: "Local Volunteer Match",
        description: "Match students with local volunteer opportunities and track hours.",
        image_seed: "volunteer",
        funding_goal: 9_000.0,
        current_funding: 2_100.0,
        category: "Community",
        status: ProjectStatus::Pending,
        featured: false,
        field_id: "f-sustain",
    },
    DemoProject {
        id: "p-1",
        author_id: STUDENT,
        title: "AI-Powered Medical Diagnosis Assistant",
        description: "ML system analyzing images and patient data to help clinicians triage cases.",
        image_seed: "medical-ai",
        funding_goal: 150_000.0,
        current_funding: 87_500.0,
        category: "Healthcare",
        status: ProjectStatus::Reviewed,
        featured: false,
        field_id: "f-ai",
    },
    DemoProject {
        id: "p-2",
        author_id: STUDENT,
        title: "Micro-Investment Platform for Students",
        description: "A platform to invest spare change while learning financial literacy.",
        image_seed: "micro-invest",
        funding_goal: 100_000.0,
        current_funding: 45_000.0,
        category: "FinTech",
        status: ProjectStatus::Pending,
        featured: false,
        field_id: "f-fintech",
    },
    DemoProject {
        id: "p-3",
        author_id: SARA,
        title: "Sustainable Campus Garden Network",
        description: "IoT sensors and a community app to coordinate student-run campus gardens.",
        image_seed: "garden",
        funding_goal: 20_000.0,
        current_funding: 12_000.0,
        category: "Sustainability",
        status: ProjectStatus::Pending,
        featured: false,
        field_id: "f-sustain",
    },
    DemoProject {
        id: "p-4",
        author_id: LINA,
        title: "Adaptive Learning Tutor",
        description: "Personalized education assistant that adapts to each student\u{2019}s pace.",
        image_seed: "tutor",
        funding_goal: 50_000.0,
        current_funding: 15_000.0,
        category: "Education",
        status: ProjectStatus::Reviewed,
        featured: false,
        field_id: "f-edu",
    },
    DemoProject {
        id: "p-5",
        author_id: OMAR,
        title: "Low-Cost Prosthetics with 3D Printing",
        description: "Open-source designs for low-cost prosthetic components.",
        image_seed: "prosthetics",
        funding_goal: 80_000.0,
        current_funding: 30_000.0,
        category: "Healthcare",
        status: ProjectStatus::Pending,
        featured: false,
        field_id: "f-health",
    },
    DemoProject {
        id: "p-6",
        author_id: LINA,
        title: "Robotics Club: Swarm Drones",
        description: "Research project exploring swarm coordination algorithms for drones.",
        image_seed: "drones",
        funding_goal: 120_000.0,
        current_funding: 60_000.0,
        category: "Robotics",
        status: ProjectStatus::Reviewed,
        featured: false,
        field_id: "f-robotics",
    },
    DemoProject {
        id: "p-7",
        author_id: SARA,
        title: "Green Energy Dashboard",
        description: "Analytics dashboard for campus energy usage with ML-driven savings suggestions.",
        image_seed: "green-energy",
        funding_goal: 30_000.0,
        current_funding: 22_000.0,
        category: "Sustainability",
        status: ProjectStatus::Reviewed,
        featured: true,
        field_id: "f-sustain",
    },
    DemoProject {
        id: "p-8",
        author_id: OMAR,
        title: "Clinic Queue Optimizer",
        description: "A queue management system for clinics to reduce patient wait times.",
        image_seed: "clinic-queue",
        funding_goal: 45_000.0,
        current_funding: 18_000.0,
        category: "Healthcare",
        status: ProjectStatus::Pending,
        featured: false,
        field_id: "f-health",
    },
    DemoProject {
        id: "p-9",
        author_id: STUDENT,
        title: "AI Essay Grader",
        description: "Tool to provide feedback on student essays using NLP models.",
        image_seed: "essay-grader",
        funding_goal: 25_000.0,
        current_funding: 12_500.0,
        category: "Education",
        status: ProjectStatus::Pending,
        featured: true,
        field_id: "f-ai",
    },
    DemoProject {
        id: "p-10",
        author_id: LINA,
        title: "Accessible Notes App",
        description: "Notes app focused on accessibility for visually impaired students.",
        image_seed: "notes-app",
        funding_goal: 12_000.0,
        current_funding: 4_000.0,
        category: "Education",
        status: ProjectStatus::Pending,
        featured: false,
        field_id: "f-edu",
    },
];

const LIKES: &[(&str, &str)] = &[("p-1", INVESTOR), ("p-4", STUDENT), ("p-3", LINA)];

/// Stable placeholder image for a seed keyword.
fn image_url(seed: &str) -> String {
    format!("https://picsum.photos/seed/{seed}/800/480")
}

pub(super) fn load_demo_data(memory: &mut Memory) {
    memory
        .users
        .extend(USERS.iter().map(|&(id, email, name, role)| User {
            id: id.to_string(),
            email: email.to_string(),
            display_name: name.to_string(),
            role,
        }));

    memory.fields.extend(FIELDS.iter().map(|&(id, name)| Field {
        id: id.to_string(),
        name: name.to_string(),
    }));

    for demo in PROJECTS {
        memory.projects.push(Project {
            id: demo.id.to_string(),
            author_id: demo.author_id.to_string(),
            title: demo.title.to_string(),
            description: demo.description.to_string(),
            image_url: Some(image_url(demo.image_seed)),
            funding_goal: demo.funding_goal,
            current_funding: demo.current_funding,
            category: demo.category.to_string(),
            status: demo.status,
            featured: demo.featured.then_some(true),
        });
    }

    memory
        .project_fields
        .extend(PROJECTS.iter().map(|demo| ProjectField {
            project_id: demo.id.to_string(),
            field_id: demo.field_id.to_string(),
        }));

    memory
        .project_likes
        .extend(LIKES.iter().map(|&(project_id, user_id)| ProjectLike {
            project_id: project_id.to_string(),
            user_id: user_id.to_string(),
        }));
}

//! Built-in resume used to preview templates when no data is supplied.

use serde_json::{json, Value};

/// A complete example resume touching every section a template can render.
pub fn sample_resume() -> Value {
    json!({
        "fullName": "Jordan Rivera",
        "jobTitle": "Software Engineer",

        "email": "jordan.rivera@example.com",
        "phone": "(555) 010-2030",
        "location": "Portland, OR",
        "website": "jordanrivera.dev",
        "linkedin": "linkedin.com/in/jordanrivera",
        "github": "github.com/jrivera",

        "education": [
            {
                "school": "State University of Technology",
                "degree": "B.Sc. in Computer Science",
                "location": "Corvallis, OR",
                "startDate": "Sep 2016",
                "endDate": "Jun 2020",
                "gpa": "3.8/4.0",
                "achievements": [
                    "Dean's List, six semesters",
                    "Capstone: distributed build cache"
                ]
            },
            {
                "school": "Riverside Community College",
                "degree": "A.S. in Information Technology",
                "location": "Portland, OR",
                "startDate": "Sep 2014",
                "endDate": "Jun 2016",
                "gpa": "3.9/4.0",
                "achievements": []
            }
        ],

        "experience": [
            {
                "title": "Senior Software Engineer",
                "company": "Northwind Systems",
                "location": "Portland, OR",
                "startDate": "Jul 2022",
                "endDate": "Present",
                "responsibilities": [
                    "Led a team of four rebuilding the billing pipeline",
                    "Cut p99 API latency by 35% with query batching",
                    "Introduced contract tests across six services"
                ]
            },
            {
                "title": "Software Engineer",
                "company": "Bluebird Labs",
                "location": "Seattle, WA",
                "startDate": "Aug 2020",
                "endDate": "Jun 2022",
                "responsibilities": [
                    "Built the customer-facing reporting dashboard",
                    "Automated release packaging, saving a day per sprint"
                ]
            }
        ],

        "skills": {
            "technical": ["Rust", "TypeScript", "PostgreSQL", "Docker", "AWS"],
            "languages": ["Rust", "TypeScript", "Python", "SQL"],
            "frameworks": ["Axum", "React", "Django"],
            "databases": ["PostgreSQL", "Redis", "SQLite"],
            "tools": ["Git", "Terraform", "GitHub Actions"],
            "softSkills": ["Mentoring", "Communication", "Planning"]
        },

        "projects": [
            {
                "title": "Ledger CLI",
                "link": "github.com/jrivera/ledger",
                "description": "Plain-text accounting tool with budget reports",
                "technologies": ["Rust", "SQLite"],
                "points": [
                    "Parses ten years of journal history in under a second",
                    "Ships as a single static binary"
                ]
            },
            {
                "title": "Trail Finder",
                "link": "github.com/jrivera/trails",
                "description": "Mobile app for discovering nearby hiking trails",
                "technologies": ["React Native", "PostGIS"],
                "points": [
                    "Offline map tiles with incremental sync",
                    "Community ratings with moderation queue"
                ]
            }
        ]
    })
}

//! Built-in catalog of monitored services and their mock profiles.

use std::collections::HashMap;

use crate::config::ServiceConfig;
use crate::registry::MockProfile;

/// (id, name, category, description, endpoint, homepage)
const SERVICES: &[(&str, &str, &str, &str, &str, &str)] = &[
    // AI / LLM
    ("openai", "OpenAI", "AI / LLM", "GPT-4, DALL-E, Whisper & API services",
     "https://status.openai.com/api/v2/status.json", "https://status.openai.com"),
    ("anthropic", "Anthropic", "AI / LLM", "Claude API & claude.ai services",
     "https://status.anthropic.com/api/v2/status.json", "https://status.anthropic.com"),
    ("groq", "Groq", "AI / LLM", "Ultra-fast LLM inference API",
     "https://groqstatus.com/api/v2/status.json", "https://groqstatus.com"),
    ("hf", "Hugging Face", "AI / LLM", "Model hub & Inference API",
     "https://status.huggingface.co/api/v2/status.json", "https://status.huggingface.co"),
    // Dev Tools
    ("github", "GitHub", "Dev Tools", "Git hosting, Actions & Packages",
     "https://www.githubstatus.com/api/v2/status.json", "https://githubstatus.com"),
    ("npm", "npm Registry", "Dev Tools", "Node.js package registry",
     "https://status.npmjs.org/api/v2/status.json", "https://status.npmjs.org"),
    ("docker", "Docker Hub", "Dev Tools", "Container registry & image hosting",
     "https://www.dockerstatus.com/api/v2/status.json", "https://www.dockerstatus.com"),
    ("atlassian", "Atlassian", "Dev Tools", "Jira, Confluence & Bitbucket cloud",
     "https://jira-software.status.atlassian.com/api/v2/status.json", "https://status.atlassian.com"),
    ("linear", "Linear", "Dev Tools", "Issue tracking for modern teams",
     "https://linearstatus.com/api/v2/status.json", "https://linearstatus.com"),
    // Hosting
    ("vercel", "Vercel", "Hosting", "Edge deployments, Functions & CDN",
     "https://www.vercel-status.com/api/v2/status.json", "https://vercel-status.com"),
    ("netlify", "Netlify", "Hosting", "JAMstack hosting & CDN",
     "https://www.netlifystatus.com/api/v2/status.json", "https://www.netlifystatus.com"),
    ("railway", "Railway", "Hosting", "App deployments & managed databases",
     "https://status.railway.app/api/v2/status.json", "https://status.railway.app"),
    // CDN / Edge
    ("cf", "Cloudflare", "CDN / Edge", "CDN, Workers, DNS & security",
     "https://www.cloudflarestatus.com/api/v2/status.json", "https://www.cloudflarestatus.com"),
    // Backend / DB
    ("supabase", "Supabase", "Backend / DB", "Postgres, Auth, Storage & Realtime",
     "https://status.supabase.com/api/v2/status.json", "https://status.supabase.com"),
    ("mongodb", "MongoDB Atlas", "Backend / DB", "Cloud database services",
     "https://status.mongodb.com/api/v2/status.json", "https://status.mongodb.com"),
    // Cloud
    ("do", "DigitalOcean", "Cloud", "Droplets, App Platform & Managed DBs",
     "https://status.digitalocean.com/api/v2/status.json", "https://status.digitalocean.com"),
    // Payments
    ("stripe", "Stripe", "Payments", "Payment processing & billing API",
     "https://status.stripe.com/api/v2/status.json", "https://status.stripe.com"),
    // Communication
    ("twilio", "Twilio", "Communication", "SMS, Voice, Video & email APIs",
     "https://status.twilio.com/api/v2/status.json", "https://status.twilio.com"),
    ("sendgrid", "SendGrid", "Communication", "Transactional & marketing email API",
     "https://status.sendgrid.com/api/v2/status.json", "https://status.sendgrid.com"),
    // Design
    ("figma", "Figma", "Design", "Collaborative design & prototyping",
     "https://status.figma.com/api/v2/status.json", "https://status.figma.com"),
];

/// (id, base ms, variance ms, up probability)
const PROFILES: &[(&str, u32, u32, f64)] = &[
    ("openai", 180, 120, 0.92),
    ("anthropic", 150, 80, 0.97),
    ("groq", 80, 60, 0.96),
    ("hf", 220, 150, 0.90),
    ("github", 90, 60, 0.97),
    ("npm", 90, 70, 0.94),
    ("docker", 160, 100, 0.93),
    ("atlassian", 200, 120, 0.92),
    ("linear", 110, 60, 0.97),
    ("vercel", 70, 50, 0.98),
    ("netlify", 110, 70, 0.96),
    ("railway", 140, 90, 0.93),
    ("cf", 55, 35, 0.99),
    ("supabase", 130, 80, 0.95),
    ("mongodb", 160, 100, 0.94),
    ("do", 120, 70, 0.96),
    ("stripe", 100, 60, 0.98),
    ("twilio", 170, 100, 0.95),
    ("sendgrid", 200, 120, 0.93),
    ("figma", 140, 80, 0.95),
];

pub fn builtin_services() -> Vec<ServiceConfig> {
    SERVICES
        .iter()
        .map(|&(id, name, category, description, endpoint, homepage)| ServiceConfig {
            id: id.to_string(),
            name: name.to_string(),
            category: category.to_string(),
            description: description.to_string(),
            endpoint_url: endpoint.to_string(),
            homepage_url: homepage.to_string(),
        })
        .collect()
}

pub fn builtin_profiles() -> HashMap<String, MockProfile> {
    PROFILES
        .iter()
        .map(|&(id, base, variance, up)| {
            (
                id.to_string(),
                MockProfile {
                    base_latency_ms: base,
                    variance_ms: variance,
                    up_probability: up,
                },
            )
        })
        .collect()
}

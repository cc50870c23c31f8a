//! Built-in portfolio content, used until (or instead of) the content API.

use super::{Contact, Episode, Idea, Internship};

const EMAIL: &str = "tarushgs@gmail.com";

fn tags(list: &[&str]) -> Vec<String> {
    list.iter().map(|t| t.to_string()).collect()
}

pub(super) fn internships() -> Vec<Internship> {
    vec![
        Internship {
            slug: "turing".into(),
            company: "Turing".into(),
            role: "AI Training & Evaluation".into(),
            period: "2025".into(),
            description: "Built datasourcing and post training workflows for a frontier lab on their SOTA AI model.".into(),
            details: "\
- Built datasourcing and post training workflows for a frontier lab on their SOTA AI model.
- Proposed and executed product and engineering features for a client project.
- Built automation infrastructure for the executive team.
- Reported to CEO."
                .into(),
            tags: tags(&["AI", "Machine Learning", "NLP"]),
            contact: Some(Contact {
                email: EMAIL.into(),
                cc: Some("tarush.gupta@turing.com".into()),
                subject: "Turing: ".into(),
            }),
        },
        Internship {
            slug: "humanx".into(),
            company: "HumanX".into(),
            role: "Engineering Intern".into(),
            period: "2024".into(),
            description: "HumanX is a venture-backed cross-vertical gathering of the most influential people in AI.".into(),
            details: "\
- HumanX is a venture-backed cross-vertical gathering of the most influential people in AI, in March of 2025.
- Building a comprehensive competitive strategy by conducting analysis and coordinating speaker logistics.
- Reporting to Marketing, Speaker Outreach, and the CEO."
                .into(),
            tags: tags(&["AI", "Product", "Engineering"]),
            contact: Some(Contact {
                email: EMAIL.into(),
                cc: None,
                subject: "HumanX: ".into(),
            }),
        },
        Internship {
            slug: "ema".into(),
            company: "Ema Unlimited".into(),
            role: "Software Engineering".into(),
            period: "2024".into(),
            description: "Ema is an AI \"employee\" which turns intricate workflows into a chat, boosting company-wide productivity.".into(),
            details: "\
- Ema is an AI \"employee\" which turns intricate workflows into a chat, boosting company-wide productivity.
- Deeply analyzed a specific vertical and identified pain points requiring AI innovation.
- Reporting directly to the CEO."
                .into(),
            tags: tags(&["AI", "Enterprise", "Automation"]),
            contact: Some(Contact {
                email: EMAIL.into(),
                cc: None,
                subject: "Ema: ".into(),
            }),
        },
        Internship {
            slug: "proshort".into(),
            company: "Proshort".into(),
            role: "Engineering Intern".into(),
            period: "2023".into(),
            description: "Proshort is a short-form video generation platform for enterprises.".into(),
            details: "\
- Proshort is a short-form video generation platform for enterprises.
- Created competitive strategy, market positioning and feature roadmap, working for the head of product.
- Earned special recommendation from the CEO, who is currently executing the proposed roadmap."
                .into(),
            tags: tags(&["Video", "Content", "Tech"]),
            contact: Some(Contact {
                email: EMAIL.into(),
                cc: None,
                subject: "Proshort: ".into(),
            }),
        },
    ]
}

pub(super) fn ideas() -> Vec<Idea> {
    let idea = |slug: &str, title: &str, summary: &str, t: &[&str], details: &str| Idea {
        slug: slug.into(),
        title: title.into(),
        status: "available".into(),
        summary: summary.into(),
        tags: tags(t),
        details: details.into(),
    };

    vec![
        idea(
            "resume-tailor",
            "AI-Powered Resume Tailor",
            "Automatically customize resumes for specific job postings using LLMs. Match keywords, rephrase experience, and optimize for ATS systems.",
            &["AI", "HR Tech", "SaaS"],
            "\
## The Problem
Job seekers spend hours tailoring resumes for each application. Most don't do it well, leading to ATS rejections and missed opportunities.

## The Solution
An AI tool that analyzes job postings and automatically rewrites resume bullet points to match keywords, tone, and requirements while keeping the content authentic.

## Key Features
- Paste job posting URL, get tailored resume
- ATS compatibility scoring
- Keyword gap analysis
- Multiple export formats

## Market Opportunity
$500M+ resume builder market. Differentiation through AI-first approach and job-specific optimization.

## Technical Approach
GPT-4 for rewriting, custom fine-tuning on successful resumes, integration with job boards for automated posting analysis.",
        ),
        idea(
            "meeting-cost",
            "Meeting Cost Calculator",
            "Chrome extension that shows real-time cost of meetings based on attendees' estimated salaries. Make meetings more intentional.",
            &["Productivity", "Extension"],
            "\
## The Problem
Companies waste millions on unnecessary meetings. Most people don't realize a 1-hour meeting with 10 people costs $500-2000 in salary alone.

## The Solution
A Chrome extension that integrates with Google Calendar and shows real-time meeting costs based on attendee roles and estimated compensation.

## Key Features
- Real-time cost ticker during meetings
- Weekly/monthly meeting cost reports
- ROI tracking for recurring meetings
- Suggested attendee optimization

## Monetization
Freemium model. Free for individuals, paid for teams with analytics dashboard.

## Go-to-Market
Product Hunt launch, LinkedIn viral content about meeting costs, target productivity-focused companies.",
        ),
        idea(
            "scholarship-matcher",
            "Scholarship Matching Engine",
            "AI that matches students with scholarships they're actually eligible for. No more scrolling through thousands of irrelevant listings.",
            &["EdTech", "AI", "Matching"],
            "\
## The Problem
$100M+ in scholarships go unclaimed yearly. Students can't find relevant opportunities among thousands of listings with complex eligibility criteria.

## The Solution
AI-powered matching that understands student profiles and scholarship requirements to surface only relevant, high-probability matches.

## Key Features
- One-time profile creation
- Smart matching algorithm
- Deadline tracking and reminders
- Application status tracking
- Essay assistance integration

## Data Strategy
Scrape and structure scholarship databases, build relationships with scholarship providers for direct listings.

## Revenue Model
Free for students. Revenue from premium features, institutional partnerships, and scholarship provider listings.",
        ),
        idea(
            "founder-accountability",
            "Founder Accountability App",
            "Daily check-ins for solo founders. Share progress, get matched with accountability partners, prevent burnout through community.",
            &["Community", "Startups"],
            "\
## The Problem
Solo founding is lonely. 72% of founders report mental health struggles. Accountability partners help but are hard to find and maintain.

## The Solution
Structured daily check-ins with AI-matched accountability partners at similar stages. Focus on consistency over perfection.

## Key Features
- 2-minute daily check-ins
- AI matching based on stage, industry, timezone
- Streak tracking and gentle nudges
- Weekly video calls with partner
- Anonymous founder community

## Differentiation
Not another Slack community. Structured, async-first, focused on action over discussion.

## Growth Strategy
Partner with accelerators, indie hacker communities, founder Twitter.",
        ),
        idea(
            "teen-events",
            "Local Event Discovery for Teens",
            "Curated events, workshops, and opportunities specifically for high schoolers. Filter by interest, free/paid, and location.",
            &["Consumer", "Gen Z", "Local"],
            "\
## The Problem
Teens are bored and disconnected. Great local opportunities exist but are scattered across school emails, community boards, and random websites.

## The Solution
A curated discovery platform specifically for high schoolers to find local events, workshops, volunteer opportunities, and competitions.

## Key Features
- Interest-based filtering
- Free/paid filters for accessibility
- Friend activity and group planning
- Resume/college app integration
- Parent approval workflows

## Content Strategy
Partner with local organizations, schools, and libraries. User submissions with verification.

## Monetization
Featured listings for event organizers, premium features for power users.",
        ),
        idea(
            "oss-matcher",
            "Open Source Contribution Matcher",
            "Match developers with open source projects that need their specific skills. Lower the barrier to first contributions.",
            &["Developer Tools", "Open Source"],
            "\
## The Problem
Developers want to contribute to open source but don't know where to start. Maintainers need help but can't find contributors with the right skills.

## The Solution
A matching platform that analyzes developer skills from GitHub and matches them with \"good first issues\" they're uniquely qualified to solve.

## Key Features
- GitHub skill analysis
- Personalized issue recommendations
- Difficulty and time estimates
- Mentorship matching for complex issues
- Contribution tracking and portfolio

## Technical Approach
GitHub API for skill inference, NLP on issue descriptions, collaborative filtering for recommendations.

## Community Building
Partner with major OSS projects, sponsor Hacktoberfest, integrate with GitHub Sponsors.",
        ),
    ]
}

pub(super) fn episodes() -> Vec<Episode> {
    let episode = |title: &str, description: &str, video: &str| Episode {
        title: title.into(),
        description: description.into(),
        url: format!("https://www.youtube.com/embed/{video}"),
        notes: description.into(),
        slug: None,
    };

    vec![
        episode(
            "Gemini 3 Pro: The Next Sea Change in LLM Models",
            "An analysis of Google's Gemini 3 Pro and what it signals about the future of foundation models.",
            "ZkO8OKDhTuM",
        ),
        episode(
            "Monetization in AI: The Future of LLMs and Profitability",
            "An exploration of how large language models transition from research breakthroughs to viable businesses.",
            "Rp5HDpas2r8",
        ),
        episode(
            "3 AI Trends That Will Change Everything in 2025",
            "An overview of the most important technical and economic shifts shaping AI's near future.",
            "9uHFm48cDrI",
        ),
        episode(
            "Intelligence, In Motion: The Next Leap for AI and Robotics (Mahesh Krishnamurthi)",
            "A discussion with Mahesh Krishnamurthi, cofounder and CEO of Vayu Robotics, on embodied intelligence, robotics, and AI in physical systems.",
            "IUuQySu6wPs",
        ),
        episode(
            "Are We Living in Sci-Fi Already? Analyzing the Progress of AI Superintelligence",
            "A grounded look at how close current AI systems are to science-fiction-level intelligence.",
            "Q1rRuLJfy9M",
        ),
        episode(
            "FOR BEGINNERS: EVERYTHING in AI over 6 weeks in 15 minutes",
            "A fast, structured overview of modern AI concepts for complete beginners.",
            "bCI0KQAvlUw",
        ),
        episode(
            "How AI Can Slash the Defense Budget (Yogesh Kumar)",
            "A discussion with Yogesh Kumar, the ex Director of HAL and man behind India's first light combat aircraft, on how AI systems can reduce inefficiencies and costs in large-scale defense operations.",
            "7EnsPFIgvX4",
        ),
        episode(
            "How to 1000x Your Sales Insights Through Short Form Content (Gaurav Mishra)",
            "A conversation with Gaurav Mishra, founder and CEO of ProShort, on using short-form content and AI to dramatically improve sales intelligence and distribution.",
            "0BihMbhJNcM",
        ),
        episode(
            "Welcome to Neural Bridge!",
            "An introduction to Neural Bridge and its mission to connect cutting-edge AI research with real-world impact.",
            "Wd5EESuc_cg",
        ),
    ]
}

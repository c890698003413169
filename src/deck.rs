// ABOUTME: Content layer enumerating the fourteen slides of the GSD framework deck
// ABOUTME: Fixed palette, geometry and copy; builds the full presentation in declaration order

use crate::color::Color;
use crate::composer::{self, BulletStyle, TextStyle};
use crate::document::Alignment::Center;
use crate::document::{Outline, Presentation, ShapeKind, Slide};
use crate::units::{inches, points, Geometry};

// Colour palette
pub const NAVY: Color = Color::new(0x1B, 0x2A, 0x4A);
pub const DARK_NAVY: Color = Color::new(0x0F, 0x1A, 0x33);
pub const TEAL: Color = Color::new(0x00, 0xB4, 0xD8);
pub const ORANGE: Color = Color::new(0xFF, 0x6B, 0x35);
pub const LIGHT_GREY: Color = Color::new(0xCC, 0xCC, 0xCC);
pub const MID_GREY: Color = Color::new(0x99, 0x99, 0x99);
pub const SOFT_WHITE: Color = Color::new(0xE8, 0xEE, 0xF4);
pub const GREEN: Color = Color::new(0x2E, 0xCC, 0x71);
pub const YELLOW: Color = Color::new(0xF3, 0x9C, 0x12);
pub const RED: Color = Color::new(0xE7, 0x4C, 0x3C);
pub const PURPLE: Color = Color::new(0xAF, 0x7A, 0xC5);

/// Card and code-block backgrounds, a step darker than the slide itself.
pub const CARD: Color = Color::new(0x15, 0x22, 0x3E);
pub const CODE_BG: Color = Color::new(0x0A, 0x12, 0x28);

/// Build the complete fourteen-slide deck. Every slide carries a speaker
/// note; slides appear in declaration order. Performs no I/O.
pub fn build_deck(title: &str) -> Presentation {
    let mut prs = Presentation::new(title);

    slide_title(&mut prs);
    slide_context_rot(&mut prs);
    slide_what_is_gsd(&mut prs);
    slide_design_principles(&mut prs);
    slide_core_workflow(&mut prs);
    slide_context_engineering(&mut prs);
    slide_multi_agent(&mut prs);
    slide_plans_as_prompts(&mut prs);
    slide_wave_execution(&mut prs);
    slide_verification(&mut prs);
    slide_configuration(&mut prs);
    slide_flexibility(&mut prs);
    slide_why_it_matters(&mut prs);
    slide_get_started(&mut prs);

    prs
}

/// Standard slide header: large light-weight title with a teal accent bar.
fn header(slide: &mut Slide, title: &str, title_width: f64, bar_width: f64) {
    composer::add_text_box(
        slide,
        Geometry::from_inches(0.8, 0.5, title_width, 0.8),
        title,
        &TextStyle::size(36).bold().font("Calibri Light"),
    );
    composer::add_accent_bar(slide, inches(0.8), inches(1.2), inches(bar_width), TEAL);
}

fn slide_title(prs: &mut Presentation) {
    let slide_width = prs.slide_width;
    let slide = prs.add_slide();
    composer::set_background(slide, DARK_NAVY);

    // Accent line across the very top
    composer::add_rect(slide, Geometry::new(0, 0, slide_width, points(6.0)), TEAL);

    composer::add_text_box(
        slide,
        Geometry::from_inches(1.0, 2.0, 11.333, 1.5),
        "GET SHIT DONE",
        &TextStyle::size(54).bold().align(Center).font("Calibri Light"),
    );
    composer::add_text_box(
        slide,
        Geometry::from_inches(2.0, 3.5, 9.333, 1.0),
        "A Context Engineering Framework for Reliable AI-Augmented Development",
        &TextStyle::size(22).color(TEAL).align(Center),
    );
    composer::add_text_box(
        slide,
        Geometry::from_inches(2.0, 5.0, 9.333, 0.5),
        "github.com/glittercowboy/get-shit-done  |  MIT License  |  v1.11",
        &TextStyle::size(14).color(MID_GREY).align(Center),
    );

    composer::add_notes(slide, "GSD is an open-source meta-prompting and context engineering system that makes AI coding assistants reliable for building production software. Created by solo developer TACHES, trusted by engineers at Amazon, Google, Shopify, and Webflow.");
}

fn slide_context_rot(prs: &mut Presentation) {
    let slide = prs.add_slide();
    composer::set_background(slide, DARK_NAVY);
    header(slide, "THE CONTEXT ROT PROBLEM", 8.0, 3.0);

    // Quality zones, widest bar at the top
    let zones: [(&str, &str, Color, f64); 4] = [
        ("0-30%", "PEAK", GREEN, 1.5),
        ("30-50%", "GOOD", YELLOW, 1.2),
        ("50-70%", "DEGRADING", ORANGE, 0.9),
        ("70%+", "POOR", RED, 0.6),
    ];

    let x_start = inches(0.8);
    let y_start = inches(2.0);
    let bar_width = inches(2.5);

    for (i, (label, quality, color, height)) in zones.iter().enumerate() {
        let y = y_start + inches(i as f64 * 1.15);
        composer::add_rect(
            slide,
            Geometry::new(x_start, y, bar_width, inches(*height)),
            *color,
        );
        composer::add_text_box(
            slide,
            Geometry::new(x_start + inches(0.2), y + points(4.0), inches(2.0), inches(0.4)),
            &format!("{}  {}", label, quality),
            &TextStyle::size(14).color(DARK_NAVY).bold(),
        );
    }

    composer::add_text_box(
        slide,
        Geometry::from_inches(0.8, 6.3, 4.0, 0.5),
        "Context Window Usage \u{2192} Quality Degrades",
        &TextStyle::size(13).color(MID_GREY),
    );

    composer::add_bullet_list(
        slide,
        Geometry::from_inches(6.5, 2.0, 6.0, 4.5),
        &[
            "\u{25b6}  AI output degrades as context fills up",
            "\u{25b6}  \"Vibecoding\" produces inconsistent results at scale",
            "\u{25b6}  Existing tools add enterprise overhead",
            "\u{25b6}  No systematic approach to context management",
            "\u{25b6}  Session continuity is lost across resets",
        ],
        &BulletStyle::size(18).spacing(14),
    );

    composer::add_notes(slide, "Claude Code is powerful, but quality degrades predictably with context usage. At 70%+ context, you get inconsistent, error-prone code. Existing spec-driven tools don't address this \u{2014} they add sprint ceremonies and enterprise processes. GSD was built to solve context rot.");
}

fn slide_what_is_gsd(prs: &mut Presentation) {
    let slide = prs.add_slide();
    composer::set_background(slide, DARK_NAVY);
    header(slide, "WHAT IS GSD?", 11.0, 2.0);

    // Left column
    composer::add_box(
        slide,
        Geometry::from_inches(0.8, 1.8, 5.5, 5.0),
        CARD,
        Some(TEAL),
    );
    composer::add_text_box(
        slide,
        Geometry::from_inches(1.2, 2.0, 4.5, 0.5),
        "WHAT YOU SEE",
        &TextStyle::size(20).color(TEAL).bold(),
    );
    composer::add_bullet_list(
        slide,
        Geometry::from_inches(1.2, 2.7, 4.5, 3.5),
        &[
            "npx get-shit-done-cc",
            "/gsd:new-project",
            "/gsd:plan-phase 1",
            "/gsd:execute-phase 1",
            "/gsd:verify-work 1",
        ],
        &BulletStyle::size(17).color(SOFT_WHITE).spacing(12),
    );

    // Right column
    composer::add_box(
        slide,
        Geometry::from_inches(7.0, 1.8, 5.5, 5.0),
        CARD,
        Some(ORANGE),
    );
    composer::add_text_box(
        slide,
        Geometry::from_inches(7.4, 2.0, 4.5, 0.5),
        "WHAT'S HAPPENING",
        &TextStyle::size(20).color(ORANGE).bold(),
    );
    composer::add_bullet_list(
        slide,
        Geometry::from_inches(7.4, 2.7, 4.5, 3.5),
        &[
            "11 specialised AI agents",
            "Context window management",
            "XML prompt formatting",
            "Subagent orchestration",
            "State persistence & recovery",
        ],
        &BulletStyle::size(17).color(SOFT_WHITE).spacing(12),
    );

    composer::add_text_box(
        slide,
        Geometry::from_inches(0.8, 6.9, 11.5, 0.5),
        "Supports Claude Code  \u{2022}  OpenCode  \u{2022}  Gemini CLI   |   Mac, Windows, Linux",
        &TextStyle::size(14).color(MID_GREY).align(Center),
    );

    composer::add_notes(slide, "GSD hides significant complexity behind simple slash commands. You interact with a few commands; behind the scenes, the system manages 11 specialised agents, context windows, structured artifacts, and verification pipelines. Installs in one command, works cross-platform.");
}

fn slide_design_principles(prs: &mut Presentation) {
    let slide = prs.add_slide();
    composer::set_background(slide, DARK_NAVY);
    header(slide, "DESIGN PRINCIPLES", 11.0, 2.5);

    let principles: [(&str, &str, Color); 5] = [
        (
            "PLANS = PROMPTS",
            "XML-structured executable instructions,\nnot documents to interpret",
            TEAL,
        ),
        (
            "FRESH CONTEXTS",
            "200k-token windows per execution\nunit \u{2014} peak quality zone",
            GREEN,
        ),
        (
            "GOAL-BACKWARD",
            "Verify outcomes match intent,\nnot just task completion",
            ORANGE,
        ),
        (
            "AUTOMATION-FIRST",
            "Claude does the work;\nhumans verify and decide",
            TEAL,
        ),
        ("NO ENTERPRISE\nTHEATRE", "Built for builders, not\nbureaucrats", ORANGE),
    ];

    for (i, (title, desc, color)) in principles.iter().enumerate() {
        let x = inches(0.6) + inches(i as f64 * 2.5);
        let y = inches(2.0);

        composer::add_box(
            slide,
            Geometry::new(x, y, inches(2.3), inches(4.5)),
            CARD,
            Some(*color),
        );

        // Numbered circle at the top of each card
        let circle = slide.add_shape(
            ShapeKind::Oval,
            Geometry::new(x + inches(0.85), y + inches(0.3), inches(0.6), inches(0.6)),
        );
        circle.fill = Some(*color);
        let frame = circle.frame_mut();
        frame.word_wrap = false;
        frame.push(
            TextStyle::size(20)
                .color(DARK_NAVY)
                .bold()
                .align(Center)
                .paragraph(&(i + 1).to_string()),
        );

        composer::add_text_box(
            slide,
            Geometry::new(x + inches(0.15), y + inches(1.2), inches(2.0), inches(0.9)),
            title,
            &TextStyle::size(14).color(*color).bold().align(Center),
        );
        composer::add_text_box(
            slide,
            Geometry::new(x + inches(0.15), y + inches(2.4), inches(2.0), inches(1.5)),
            desc,
            &TextStyle::size(12).color(SOFT_WHITE).align(Center),
        );
    }

    composer::add_notes(slide, "Five principles drive GSD. Plans are literal prompts \u{2014} XML-structured instructions. Every execution unit gets a fresh context. Verification checks goals, not tasks. Claude automates everything it can. No sprint ceremonies or story points.");
}

fn slide_core_workflow(prs: &mut Presentation) {
    let slide = prs.add_slide();
    composer::set_background(slide, DARK_NAVY);
    header(slide, "THE CORE WORKFLOW", 11.0, 2.5);

    // Init box at the top
    let init_box = composer::add_box(
        slide,
        Geometry::from_inches(4.5, 1.7, 4.3, 0.8),
        NAVY,
        Some(TEAL),
    );
    let frame = init_box.frame_mut();
    frame.push(
        TextStyle::size(16)
            .color(TEAL)
            .bold()
            .align(Center)
            .paragraph("/gsd:new-project"),
    );
    frame.push(
        TextStyle::size(11)
            .color(LIGHT_GREY)
            .align(Center)
            .paragraph("Questions \u{2192} Research \u{2192} Requirements \u{2192} Roadmap"),
    );

    let stages: [(&str, &str, &str, Color); 4] = [
        ("DISCUSS", "/gsd:discuss-phase N", "Capture user\npreferences", TEAL),
        ("PLAN", "/gsd:plan-phase N", "Research + atomic\nplans + validation", GREEN),
        ("EXECUTE", "/gsd:execute-phase N", "Parallel waves\nfresh contexts", ORANGE),
        ("VERIFY", "/gsd:verify-work N", "Acceptance test\ngap analysis", PURPLE),
    ];

    let y_stage = inches(3.2);
    for (i, (name, cmd, desc, color)) in stages.iter().enumerate() {
        let x = inches(0.5) + inches(i as f64 * 3.2);
        composer::add_box(
            slide,
            Geometry::new(x, y_stage, inches(2.8), inches(2.5)),
            CARD,
            Some(*color),
        );
        composer::add_text_box(
            slide,
            Geometry::new(x + inches(0.2), y_stage + inches(0.2), inches(2.4), inches(0.5)),
            name,
            &TextStyle::size(22).color(*color).bold().align(Center),
        );
        composer::add_text_box(
            slide,
            Geometry::new(x + inches(0.2), y_stage + inches(0.8), inches(2.4), inches(0.4)),
            cmd,
            &TextStyle::size(11).color(LIGHT_GREY).align(Center),
        );
        composer::add_text_box(
            slide,
            Geometry::new(x + inches(0.2), y_stage + inches(1.3), inches(2.4), inches(1.0)),
            desc,
            &TextStyle::size(13).color(SOFT_WHITE).align(Center),
        );

        // Arrow between stages
        if i < 3 {
            composer::add_text_box(
                slide,
                Geometry::new(x + inches(2.85), y_stage + inches(0.9), inches(0.4), inches(0.5)),
                "\u{25b6}",
                &TextStyle::size(20).color(MID_GREY).align(Center),
            );
        }
    }

    composer::add_text_box(
        slide,
        Geometry::from_inches(0.8, 6.2, 11.5, 0.8),
        "Repeat per phase  \u{2192}  /gsd:complete-milestone  \u{2192}  /gsd:new-milestone  \u{2192}  Next cycle",
        &TextStyle::size(15).color(LIGHT_GREY).align(Center),
    );

    composer::add_notes(slide, "The core workflow is a loop: initialise once, then discuss, plan, execute, verify per phase. Each phase gets user input, proper research, clean execution in fresh contexts, and goal-backward verification. When all phases complete, archive the milestone and start the next version.");
}

fn slide_context_engineering(prs: &mut Presentation) {
    let slide = prs.add_slide();
    composer::set_background(slide, DARK_NAVY);
    header(slide, "CONTEXT ENGINEERING", 11.0, 2.5);

    let artifacts: [(&str, &str, Color); 7] = [
        ("PROJECT.md", "Project vision \u{2014} always loaded", TEAL),
        ("REQUIREMENTS.md", "Scoped v1/v2 requirements", TEAL),
        ("ROADMAP.md", "Phased execution plan", TEAL),
        ("STATE.md", "Living memory across sessions", ORANGE),
        ("CONTEXT.md", "User\u{2019}s implementation decisions", GREEN),
        ("PLAN.md", "XML-structured executable prompts", GREEN),
        ("VERIFICATION.md", "Goal achievement report", PURPLE),
    ];

    for (i, (name, desc, color)) in artifacts.iter().enumerate() {
        let y = inches(1.8) + inches(i as f64 * 0.72);
        composer::add_box(
            slide,
            Geometry::new(inches(0.8), y, inches(5.5), inches(0.6)),
            CARD,
            Some(*color),
        );
        composer::add_text_box(
            slide,
            Geometry::new(inches(1.0), y + points(4.0), inches(2.2), inches(0.4)),
            name,
            &TextStyle::size(14).color(*color).bold(),
        );
        composer::add_text_box(
            slide,
            Geometry::new(inches(3.2), y + points(4.0), inches(3.0), inches(0.4)),
            desc,
            &TextStyle::size(13).color(SOFT_WHITE),
        );
    }

    composer::add_box(
        slide,
        Geometry::from_inches(7.0, 1.8, 5.5, 5.0),
        CARD,
        Some(TEAL),
    );
    composer::add_text_box(
        slide,
        Geometry::from_inches(7.4, 2.0, 4.7, 0.5),
        "KEY INSIGHT",
        &TextStyle::size(18).color(TEAL).bold(),
    );
    composer::add_bullet_list(
        slide,
        Geometry::from_inches(7.4, 2.7, 4.7, 3.8),
        &[
            "Every artifact has size constraints mapped to Claude's quality curve",
            "STATE.md is read FIRST in every workflow, updated after every action",
            "Plans stay at 2-3 tasks \u{2014} small enough for the peak quality zone",
            "Each executor gets a fresh 200k-token context with zero accumulated garbage",
            "Result: consistent quality throughout the entire project lifecycle",
        ],
        &BulletStyle::size(14).color(SOFT_WHITE).spacing(14),
    );

    composer::add_notes(slide, "GSD manages Claude's context through structured artifacts with deliberate size constraints. PROJECT.md holds the vision. STATE.md is living memory read first everywhere. Plans are small enough for peak quality. Each executor gets fresh 200k tokens. The result is consistent output quality.");
}

fn slide_multi_agent(prs: &mut Presentation) {
    let slide = prs.add_slide();
    composer::set_background(slide, DARK_NAVY);
    header(slide, "MULTI-AGENT ARCHITECTURE", 11.0, 3.0);

    // Central orchestrator
    let orch = slide.add_shape(ShapeKind::Oval, Geometry::from_inches(5.5, 3.0, 2.3, 1.5));
    orch.fill = Some(NAVY);
    orch.outline = Some(Outline {
        color: TEAL,
        width_pt: 2.0,
    });
    orch.frame_mut().push(
        TextStyle::size(14)
            .color(TEAL)
            .bold()
            .align(Center)
            .paragraph("THIN\nORCHESTRATOR"),
    );

    let quadrants: [(&str, &[&str], f64, f64, Color); 4] = [
        (
            "RESEARCH",
            &["Project Researcher", "Phase Researcher", "Synthesizer", "Codebase Mapper"],
            0.5,
            1.7,
            TEAL,
        ),
        ("PLANNING", &["Planner", "Plan Checker", "Roadmapper"], 8.5, 1.7, GREEN),
        (
            "EXECUTION",
            &["Executor (parallel)", "Fresh 200k context", "Per-task commits"],
            0.5,
            4.8,
            ORANGE,
        ),
        (
            "VERIFICATION",
            &["Verifier", "Integration Checker", "Debugger"],
            8.5,
            4.8,
            PURPLE,
        ),
    ];

    for (title, agents, x, y, color) in quadrants {
        let x = inches(x);
        let y = inches(y);
        composer::add_box(
            slide,
            Geometry::new(x, y, inches(4.2), inches(2.3)),
            CARD,
            Some(color),
        );
        composer::add_text_box(
            slide,
            Geometry::new(x + inches(0.2), y + inches(0.15), inches(3.8), inches(0.4)),
            title,
            &TextStyle::size(16).color(color).bold(),
        );
        composer::add_bullet_list(
            slide,
            Geometry::new(x + inches(0.2), y + inches(0.6), inches(3.8), inches(1.5)),
            agents,
            &BulletStyle::size(12).color(SOFT_WHITE).spacing(4),
        );
    }

    composer::add_text_box(
        slide,
        Geometry::from_inches(0.8, 7.0, 11.5, 0.4),
        "Main context stays at 30-40% usage \u{2014} heavy lifting happens in subagent contexts",
        &TextStyle::size(13).color(MID_GREY).align(Center),
    );

    composer::add_notes(slide, "11 specialised agents coordinated by thin orchestrators. Research agents investigate in parallel. Planner creates plans, checker validates in a loop. Executors get fresh 200k-token contexts. Verifier confirms goals achieved. The orchestrator only spawns, waits, and integrates \u{2014} your main session stays fast.");
}

fn slide_plans_as_prompts(prs: &mut Presentation) {
    let slide = prs.add_slide();
    composer::set_background(slide, DARK_NAVY);
    header(slide, "PLANS AS EXECUTABLE PROMPTS", 11.0, 3.0);

    composer::add_box(
        slide,
        Geometry::from_inches(0.8, 1.8, 6.5, 4.8),
        CODE_BG,
        Some(TEAL),
    );

    let code_lines = [
        "<task type=\"auto\">",
        "  <name>Create login endpoint</name>",
        "  <files>src/api/auth/login.ts</files>",
        "  <action>",
        "    POST endpoint: {email, password}.",
        "    Query User by email, compare with",
        "    bcrypt. JWT via jose library.",
        "    Set httpOnly cookie on success.",
        "  </action>",
        "  <verify>",
        "    curl -X POST localhost:3000/api/auth",
        "    returns 200 + Set-Cookie header",
        "  </verify>",
        "  <done>Valid creds -> cookie, invalid -> 401</done>",
        "</task>",
    ];
    composer::add_text_box(
        slide,
        Geometry::from_inches(1.1, 2.0, 6.0, 4.2),
        &code_lines.join("\n"),
        &TextStyle::size(13).color(SOFT_WHITE).font("Consolas"),
    );

    let annotations: [(&str, &str, Color); 5] = [
        (
            "TASK TYPE",
            "auto | checkpoint:human-verify\ncheckpoint:decision",
            TEAL,
        ),
        ("FILES", "Exact targets \u{2014}\nno ambiguity", GREEN),
        ("ACTION", "Precise instructions with\nlibraries and approach", ORANGE),
        ("VERIFY", "Concrete test command\nbuilt into every task", PURPLE),
        ("DONE", "Measurable acceptance\ncriteria", TEAL),
    ];

    for (i, (label, desc, color)) in annotations.iter().enumerate() {
        let y = inches(1.8) + inches(i as f64 * 1.0);
        composer::add_text_box(
            slide,
            Geometry::new(inches(8.0), y, inches(2.0), inches(0.3)),
            label,
            &TextStyle::size(14).color(*color).bold(),
        );
        composer::add_text_box(
            slide,
            Geometry::new(inches(8.0), y + inches(0.3), inches(4.5), inches(0.6)),
            desc,
            &TextStyle::size(12).color(SOFT_WHITE),
        );
    }

    composer::add_text_box(
        slide,
        Geometry::from_inches(0.8, 6.9, 11.5, 0.4),
        "2-3 tasks per plan \u{2014} small enough for peak quality zone  |  Verification built into every task",
        &TextStyle::size(13).color(MID_GREY).align(Center),
    );

    composer::add_notes(slide, "Plans are structured XML optimised for Claude. Each task specifies exact files, precise actions, a verification command, and acceptance criteria. 2-3 tasks per plan keeps each executor in the peak quality zone. There's no ambiguity \u{2014} Claude knows exactly what to build and how to verify it.");
}

fn slide_wave_execution(prs: &mut Presentation) {
    let slide = prs.add_slide();
    composer::set_background(slide, DARK_NAVY);
    header(slide, "WAVE-BASED PARALLEL EXECUTION", 11.0, 3.0);

    let waves: [(&str, &[&str], Color); 3] = [
        ("WAVE 1", &["Plan A: Auth endpoints", "Plan B: Database schema"], TEAL),
        ("WAVE 2", &["Plan C: Frontend (depends on A+B)"], GREEN),
        ("WAVE 3", &["Plan D: Integration tests"], ORANGE),
    ];

    for (i, (wave_name, plans, color)) in waves.iter().enumerate() {
        let y = inches(1.9) + inches(i as f64 * 1.6);
        composer::add_text_box(
            slide,
            Geometry::new(inches(0.8), y, inches(1.5), inches(0.4)),
            wave_name,
            &TextStyle::size(16).color(*color).bold(),
        );
        for (j, plan) in plans.iter().enumerate() {
            let x = inches(2.8) + inches(j as f64 * 3.5);
            composer::add_box(
                slide,
                Geometry::new(x, y, inches(3.2), inches(0.7)),
                CARD,
                Some(*color),
            );
            composer::add_text_box(
                slide,
                Geometry::new(x + inches(0.2), y + points(6.0), inches(2.8), inches(0.4)),
                plan,
                &TextStyle::size(13).color(SOFT_WHITE),
            );
            composer::add_text_box(
                slide,
                Geometry::new(x + inches(0.2), y + inches(0.4), inches(2.8), inches(0.3)),
                "\u{26a1} Fresh 200k context",
                &TextStyle::size(10).color(MID_GREY),
            );
        }
    }

    composer::add_box(
        slide,
        Geometry::from_inches(7.5, 1.9, 5.0, 3.5),
        CODE_BG,
        Some(GREEN),
    );
    composer::add_text_box(
        slide,
        Geometry::from_inches(7.8, 2.1, 4.0, 0.4),
        "ATOMIC GIT COMMITS",
        &TextStyle::size(16).color(GREEN).bold(),
    );
    composer::add_bullet_list(
        slide,
        Geometry::from_inches(7.8, 2.7, 4.5, 2.5),
        &[
            "abc123 feat(01-01): create auth endpoints",
            "def456 feat(01-01): add database schema",
            "hij789 feat(01-02): build frontend forms",
            "lmn012 test(01-03): add integration tests",
        ],
        &BulletStyle::size(12).color(SOFT_WHITE).spacing(10),
    );

    let benefits = [
        "Parallel within waves, sequential across waves",
        "Every task = one atomic commit",
        "Git bisect finds exact failing task",
        "Walk away, come back to completed work",
    ];
    let y_bottom = inches(5.8);
    for (i, benefit) in benefits.iter().enumerate() {
        let x = inches(0.5) + inches(i as f64 * 3.2);
        composer::add_box(
            slide,
            Geometry::new(x, y_bottom, inches(3.0), inches(0.9)),
            CARD,
            Some(MID_GREY),
        );
        composer::add_text_box(
            slide,
            Geometry::new(x + inches(0.15), y_bottom + points(8.0), inches(2.7), inches(0.7)),
            benefit,
            &TextStyle::size(12).color(SOFT_WHITE).align(Center),
        );
    }

    composer::add_notes(slide, "Execution is wave-based. Independent plans run in parallel, each in a fresh 200k-token context. Every completed task gets an atomic git commit. Walk away, come back to completed work with a clean, bisectable git history. Main context stays light.");
}

fn slide_verification(prs: &mut Presentation) {
    let slide = prs.add_slide();
    composer::set_background(slide, DARK_NAVY);
    header(slide, "GOAL-BACKWARD VERIFICATION", 11.0, 3.0);

    // Inverted pyramid, widening downward
    let levels: [(&str, &str, f64, f64, Color); 3] = [
        (
            "LEVEL 3: WIRED",
            "Connected to the system\nComponent\u{2192}API, API\u{2192}DB, Form\u{2192}Handler",
            3.5,
            5.5,
            PURPLE,
        ),
        (
            "LEVEL 2: SUBSTANTIVE",
            "Real implementation, not stubs\nNo TODOs, placeholders, or hardcoded values",
            2.2,
            7.5,
            ORANGE,
        ),
        (
            "LEVEL 1: EXISTS",
            "File/component is present in the codebase",
            1.0,
            9.5,
            GREEN,
        ),
    ];

    let y_base = inches(2.0);
    for (i, (title, desc, x, width, color)) in levels.iter().enumerate() {
        let y = y_base + inches(i as f64 * 1.5);
        let x = inches(*x);
        let width = inches(*width);
        composer::add_box(
            slide,
            Geometry::new(x, y, width, inches(1.2)),
            CARD,
            Some(*color),
        );
        composer::add_text_box(
            slide,
            Geometry::new(x + inches(0.3), y + points(4.0), width - inches(0.6), inches(0.3)),
            title,
            &TextStyle::size(14).color(*color).bold().align(Center),
        );
        composer::add_text_box(
            slide,
            Geometry::new(x + inches(0.3), y + inches(0.4), width - inches(0.6), inches(0.7)),
            desc,
            &TextStyle::size(12).color(SOFT_WHITE).align(Center),
        );
    }

    composer::add_box(
        slide,
        Geometry::from_inches(8.5, 2.0, 4.2, 4.5),
        CARD,
        Some(RED),
    );
    composer::add_text_box(
        slide,
        Geometry::from_inches(8.8, 2.2, 3.6, 0.5),
        "CORE PRINCIPLE",
        &TextStyle::size(18).color(RED).bold(),
    );
    composer::add_bullet_list(
        slide,
        Geometry::from_inches(8.8, 2.9, 3.6, 3.2),
        &[
            "Task completion \u{2260} Goal achievement",
            "Never trust SUMMARY claims blindly",
            "Detect stubs: TODOs, placeholders, empty returns",
            "Gaps feed back into planner for closure",
        ],
        &BulletStyle::size(13).color(SOFT_WHITE).spacing(14),
    );

    composer::add_notes(slide, "Verification is goal-backward. Level 1 checks files exist. Level 2 confirms real implementations, not stubs. Level 3 verifies wiring between components. If gaps are found, they feed back into the planner. The system never declares success just because tasks ran.");
}

fn slide_configuration(prs: &mut Presentation) {
    let slide = prs.add_slide();
    composer::set_background(slide, DARK_NAVY);
    header(slide, "CONFIGURATION & MODEL PROFILES", 11.0, 3.0);

    let profiles: [[&str; 4]; 4] = [
        ["PROFILE", "PLANNING", "EXECUTION", "VERIFICATION"],
        ["Quality", "Opus", "Opus", "Sonnet"],
        ["Balanced", "Opus", "Sonnet", "Sonnet"],
        ["Budget", "Sonnet", "Sonnet", "Haiku"],
    ];

    let table_top = inches(1.8);
    let col_w = inches(2.8);
    let row_h = inches(0.55);

    for (r, row) in profiles.iter().enumerate() {
        for (c, cell) in row.iter().enumerate() {
            let x = inches(0.8) + inches(c as f64 * 2.8);
            let y = table_top + inches(r as f64 * 0.6);
            let (bg_color, text_color, bold) = if r == 0 {
                (TEAL, DARK_NAVY, true)
            } else {
                (CARD, SOFT_WHITE, c == 0)
            };
            composer::add_rect(slide, Geometry::new(x, y, col_w, row_h), bg_color);
            let mut style = TextStyle::size(14).color(text_color).align(Center);
            if bold {
                style = style.bold();
            }
            composer::add_text_box(
                slide,
                Geometry::new(x + inches(0.15), y + points(4.0), col_w - inches(0.3), row_h),
                cell,
                &style,
            );
        }
    }

    composer::add_text_box(
        slide,
        Geometry::from_inches(0.8, 4.5, 5.0, 0.4),
        "OTHER SETTINGS",
        &TextStyle::size(18).color(TEAL).bold(),
    );

    let settings: [(&str, &str); 5] = [
        ("Execution Mode", "interactive (confirm) | yolo (auto-approve)"),
        ("Planning Depth", "quick (1-3) | standard (3-5) | comprehensive (5-10)"),
        ("Workflow Agents", "Research, Plan Checker, Verifier \u{2014} all toggleable"),
        ("Git Branching", "none | per-phase | per-milestone"),
        (
            "Parallelisation",
            "Enabled by default \u{2014} independent plans run simultaneously",
        ),
    ];

    for (i, (label, desc)) in settings.iter().enumerate() {
        let y = inches(5.1) + inches(i as f64 * 0.45);
        composer::add_text_box(
            slide,
            Geometry::new(inches(0.8), y, inches(2.5), inches(0.4)),
            label,
            &TextStyle::size(13).color(ORANGE).bold(),
        );
        composer::add_text_box(
            slide,
            Geometry::new(inches(3.5), y, inches(9.0), inches(0.4)),
            desc,
            &TextStyle::size(13).color(SOFT_WHITE),
        );
    }

    composer::add_notes(slide, "GSD is configurable. Model profiles balance quality vs API cost. Quality uses Opus everywhere, Balanced puts Opus on planning, Budget minimises Opus. You can also control planning depth, toggle workflow agents, set execution mode, and choose git branching strategy.");
}

fn slide_flexibility(prs: &mut Presentation) {
    let slide = prs.add_slide();
    composer::set_background(slide, DARK_NAVY);
    header(slide, "FLEXIBILITY BUILT IN", 11.0, 2.5);

    let panels: [(&str, &str, &[&str], Color, &str); 3] = [
        (
            "QUICK MODE",
            "/gsd:quick",
            &[
                "Ad-hoc tasks with GSD guarantees",
                "Same planner + executor agents",
                "Skips research & verification",
                "Bug fixes, small features, config",
            ],
            TEAL,
            "\u{26a1}",
        ),
        (
            "SESSION MANAGEMENT",
            "/gsd:pause-work\n/gsd:resume-work",
            &[
                "Pause mid-phase, resume later",
                "Full context restoration",
                "STATE.md tracks everything",
                "No lost work across resets",
            ],
            ORANGE,
            "\u{23ef}",
        ),
        (
            "BROWNFIELD SUPPORT",
            "/gsd:map-codebase",
            &[
                "Analyse existing codebases",
                "Parallel agents: stack, arch, conventions",
                "new-project knows your patterns",
                "Questions focus on what's new",
            ],
            GREEN,
            "[B]",
        ),
    ];

    for (i, (title, cmd, items, color, icon)) in panels.iter().enumerate() {
        let x = inches(0.5) + inches(i as f64 * 4.2);
        composer::add_box(
            slide,
            Geometry::new(x, inches(1.7), inches(3.9), inches(5.3)),
            CARD,
            Some(*color),
        );
        composer::add_text_box(
            slide,
            Geometry::new(x + inches(0.3), inches(1.9), inches(3.3), inches(0.4)),
            &format!("{}  {}", icon, title),
            &TextStyle::size(18).color(*color).bold(),
        );
        composer::add_text_box(
            slide,
            Geometry::new(x + inches(0.3), inches(2.5), inches(3.3), inches(0.5)),
            cmd,
            &TextStyle::size(12).color(LIGHT_GREY),
        );
        composer::add_bullet_list(
            slide,
            Geometry::new(x + inches(0.3), inches(3.3), inches(3.3), inches(3.2)),
            items,
            &BulletStyle::size(13).color(SOFT_WHITE).spacing(10),
        );
    }

    composer::add_notes(slide, "Not every task needs full planning. Quick mode provides atomic commits and state tracking for small tasks. Session management handles pause/resume across context resets. For existing codebases, map-codebase analyses your stack so the system knows your patterns.");
}

fn slide_why_it_matters(prs: &mut Presentation) {
    let slide = prs.add_slide();
    composer::set_background(slide, DARK_NAVY);
    header(slide, "WHY THIS MATTERS", 11.0, 2.5);

    let cards: [(&str, &str, Color); 4] = [
        (
            "CONSISTENT\nQUALITY",
            "Fresh contexts prevent\ndegradation. Verification\nensures goals are met.",
            TEAL,
        ),
        (
            "FULL\nTRACEABILITY",
            "Atomic commits. Structured\nartifacts. Every decision\ndocumented.",
            GREEN,
        ),
        (
            "MULTI-RUNTIME\nSUPPORT",
            "Claude Code, OpenCode,\nGemini CLI. No vendor\nlock-in.",
            ORANGE,
        ),
        (
            "OPEN SOURCE\nMIT LICENSE",
            "Active community.\nFast evolution. Used\nat top tech companies.",
            PURPLE,
        ),
    ];

    for (i, (title, desc, color)) in cards.iter().enumerate() {
        let x = inches(0.5) + inches(i as f64 * 3.2);
        let y = inches(1.8);
        composer::add_box(
            slide,
            Geometry::new(x, y, inches(3.0), inches(3.0)),
            CARD,
            Some(*color),
        );
        // Top accent bar flush with the card
        composer::add_rect(slide, Geometry::new(x, y, inches(3.0), points(4.0)), *color);
        composer::add_text_box(
            slide,
            Geometry::new(x + inches(0.3), y + inches(0.4), inches(2.4), inches(0.8)),
            title,
            &TextStyle::size(18).color(*color).bold().align(Center),
        );
        composer::add_text_box(
            slide,
            Geometry::new(x + inches(0.3), y + inches(1.5), inches(2.4), inches(1.3)),
            desc,
            &TextStyle::size(13).color(SOFT_WHITE).align(Center),
        );
    }

    composer::add_text_box(
        slide,
        Geometry::from_inches(0.8, 5.3, 11.5, 0.4),
        "FOR TECHNICAL LEADERSHIP",
        &TextStyle::size(16).color(TEAL).bold(),
    );
    composer::add_bullet_list(
        slide,
        Geometry::from_inches(0.8, 5.8, 11.5, 1.5),
        &[
            "\u{25b6}  Predictable, verifiable output from AI coding assistants \u{2014} not random vibecoding",
            "\u{25b6}  Configurable quality/cost tradeoff via model profiles \u{2014} practical for any budget",
            "\u{25b6}  Reproducible process \u{2014} same commands, same workflow, consistent results across developers",
        ],
        &BulletStyle::size(14).color(SOFT_WHITE).spacing(8),
    );

    composer::add_notes(slide, "For technical leadership: GSD provides predictable quality through verification, full traceability through atomic commits and structured artifacts, multi-runtime support without vendor lock-in, and it's MIT licensed with an active community. It's a practical tool for organisations exploring AI-augmented development.");
}

fn slide_get_started(prs: &mut Presentation) {
    let slide = prs.add_slide();
    composer::set_background(slide, DARK_NAVY);
    header(slide, "GET STARTED", 11.0, 2.0);

    let steps: [(&str, &str, &str, Color); 5] = [
        ("1", "INSTALL", "npx get-shit-done-cc", TEAL),
        ("2", "VERIFY", "/gsd:help", GREEN),
        ("3", "INITIALISE", "/gsd:new-project  (or /gsd:map-codebase first)", ORANGE),
        ("4", "BUILD", "discuss \u{2192} plan \u{2192} execute \u{2192} verify", PURPLE),
        ("5", "SHIP", "/gsd:complete-milestone", TEAL),
    ];

    for (i, (num, label, cmd, color)) in steps.iter().enumerate() {
        let y = inches(1.7) + inches(i as f64 * 0.95);

        let circle = slide.add_shape(
            ShapeKind::Oval,
            Geometry::new(inches(0.8), y + points(4.0), inches(0.5), inches(0.5)),
        );
        circle.fill = Some(*color);
        circle.frame_mut().push(
            TextStyle::size(18)
                .color(DARK_NAVY)
                .bold()
                .align(Center)
                .paragraph(num),
        );

        composer::add_text_box(
            slide,
            Geometry::new(inches(1.6), y + points(2.0), inches(1.5), inches(0.5)),
            label,
            &TextStyle::size(18).color(*color).bold(),
        );

        // Command in a monospace box
        composer::add_box(
            slide,
            Geometry::new(inches(3.3), y, inches(6.0), inches(0.6)),
            CODE_BG,
            Some(Color::new(0x33, 0x44, 0x66)),
        );
        composer::add_text_box(
            slide,
            Geometry::new(inches(3.5), y + points(4.0), inches(5.6), inches(0.4)),
            cmd,
            &TextStyle::size(14).color(SOFT_WHITE).font("Consolas"),
        );
    }

    composer::add_text_box(
        slide,
        Geometry::from_inches(0.8, 6.4, 11.5, 0.4),
        "RESOURCES",
        &TextStyle::size(16).color(TEAL).bold().align(Center),
    );
    composer::add_text_box(
        slide,
        Geometry::from_inches(0.8, 6.9, 11.5, 0.4),
        "GitHub: github.com/glittercowboy/get-shit-done   |   NPM: get-shit-done-cc   |   Discord: discord.gg/5JJgD5svVS",
        &TextStyle::size(14).color(LIGHT_GREY).align(Center),
    );

    composer::add_notes(slide, "Getting started is one command: npx get-shit-done-cc. Verify with /gsd:help, start your first project, follow the core loop, and ship. The GitHub repo has full documentation and the Discord community is active. MIT licensed and evolving fast.");
}

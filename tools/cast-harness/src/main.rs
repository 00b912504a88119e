//! cast-harness: drives a headless cast session from the command line.
//!
//! Usage:
//!   cast-harness demo --config session.json --json
//!   cast-harness stress --seed 7 --casts 200

use std::path::{Path, PathBuf};
use std::process;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use castfx_core::descriptors::{ActionDescriptor, MovementSpec};
use castfx_core::events::CastEvent;
use castfx_core::types::{AuxParamKind, CurveHandle, Vec3, VisualTemplateId};
use castfx_core::config::SessionConfig;
use castfx_sim::headless::{CurveTable, HeadlessSubject, HeadlessVisuals};
use castfx_sim::Session;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing_subscriber::EnvFilter;

const FADE_CURVE: CurveHandle = CurveHandle(1);
const BOLT_TEMPLATE: VisualTemplateId = VisualTemplateId(1);
const ORB_TEMPLATE: VisualTemplateId = VisualTemplateId(2);

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    let result = match args[1].as_str() {
        "demo" => cmd_demo(&args[2..]),
        "stress" => cmd_stress(&args[2..]),
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        other => {
            eprintln!("Unknown command: {other}");
            print_usage();
            process::exit(1);
        }
    };

    if let Err(err) = result {
        tracing::error!("{err:#}");
        process::exit(1);
    }
}

fn print_usage() {
    eprintln!(
        "cast-harness: headless cast session driver\n\
         \n\
         Commands:\n\
         \n\
         demo      Run one scripted cast to completion\n\
         \n\
           --config <path>    SessionConfig JSON file (optional)\n\
           --json             Print every frame report as a JSON line\n\
         \n\
         stress    Run many seeded random casts and check every visual is released\n\
         \n\
           --config <path>    SessionConfig JSON file (optional)\n\
           --seed <N>         RNG seed (default: 1)\n\
           --casts <N>        Number of casts to launch (default: 64)\n\
           --max-frames <N>   Abort after N frames (default: 100000)\n\
         \n\
         Logging follows RUST_LOG (default: info).\n"
    );
}

// --- Argument helpers ---

fn parse_flag(args: &[String], name: &str) -> bool {
    args.iter().any(|a| a == name)
}

fn parse_path(args: &[String], name: &str) -> Option<PathBuf> {
    for i in 0..args.len() {
        if args[i] == name && i + 1 < args.len() {
            return Some(PathBuf::from(&args[i + 1]));
        }
    }
    None
}

fn parse_u64(args: &[String], name: &str, default: u64) -> u64 {
    for i in 0..args.len() {
        if args[i] == name && i + 1 < args.len() {
            if let Ok(n) = args[i + 1].parse::<u64>() {
                return n;
            }
        }
    }
    default
}

fn load_config(path: Option<&Path>) -> Result<SessionConfig> {
    let Some(path) = path else {
        return Ok(SessionConfig::default());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let config: SessionConfig = serde_json::from_str(&text)
        .with_context(|| format!("parsing config {}", path.display()))?;
    Ok(config)
}

fn curves() -> CurveTable {
    CurveTable::new().with(FADE_CURVE, vec![(0.0, 1.0), (1.0, 0.0)])
}

// --- Demo command ---

fn cmd_demo(args: &[String]) -> Result<()> {
    let config = load_config(parse_path(args, "--config").as_deref())?;
    let json = parse_flag(args, "--json");

    let curves = curves();
    let mut visuals = HeadlessVisuals::new();
    let mut session = Session::new(config);

    let caster = HeadlessSubject::at(Vec3::ZERO).with_param(AuxParamKind::Opacity, 1.0);
    let id = session.begin_cast(caster);
    let Some(cast) = session.cast_mut(id) else {
        bail!("cast {id:?} vanished right after creation");
    };
    cast.add_action(ActionDescriptor::animation(0.6, "wind_up", 0.1), 0.0)?;
    cast.add_action(ActionDescriptor::movement(0.3, Vec3::X, 4.0), 0.2)?;
    cast.add_action(
        ActionDescriptor::flying_object(
            1.0,
            BOLT_TEMPLATE,
            Vec3::new(0.0, 0.0, 1.5),
            MovementSpec::straight(Vec3::X, 12.0),
        ),
        0.5,
    )?;
    cast.add_action(
        ActionDescriptor::curve_param(0.8, AuxParamKind::Opacity, FADE_CURVE),
        0.7,
    )?;

    tracing::info!(tick_rate = session.config().tick_rate, "demo cast started");

    while !session.is_idle() {
        let report = session.tick(&mut visuals, &curves);
        if json {
            println!("{}", serde_json::to_string(&report)?);
        } else {
            for event in &report.events {
                tracing::info!(frame = report.time.frame, ?event);
            }
        }
        if report.time.frame > 10_000 {
            bail!("demo did not settle after {} frames", report.time.frame);
        }
    }

    let frames = session.time().frame;
    session.shutdown(&mut visuals, &curves);
    tracing::info!(
        frames,
        created = visuals.created_count(),
        live = visuals.live_count(),
        "demo finished"
    );
    Ok(())
}

// --- Stress command ---

fn cmd_stress(args: &[String]) -> Result<()> {
    let config = load_config(parse_path(args, "--config").as_deref())?;
    let seed = parse_u64(args, "--seed", 1);
    let casts = parse_u64(args, "--casts", 64);
    let max_frames = parse_u64(args, "--max-frames", 100_000);

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let curves = curves();
    let mut visuals = HeadlessVisuals::new();
    let mut session = Session::new(config);

    // A small shared spellbook; every cast reuses these descriptors.
    let spellbook: Vec<Arc<ActionDescriptor>> = vec![
        ActionDescriptor::animation(0.5, "cast", 0.1),
        ActionDescriptor::movement(0.25, Vec3::new(1.0, 1.0, 0.0), 3.0),
        ActionDescriptor::curve_param(0.6, AuxParamKind::Opacity, FADE_CURVE),
        ActionDescriptor::flying_object(
            0.8,
            BOLT_TEMPLATE,
            Vec3::Z,
            MovementSpec::straight(Vec3::X, 15.0),
        ),
        ActionDescriptor::flying_object(
            1.2,
            ORB_TEMPLATE,
            Vec3::Z,
            MovementSpec::ballistic(Vec3::new(4.0, 0.0, 6.0)),
        ),
    ];

    let mut launched = 0u64;
    let mut counts = Counts::default();

    while launched < casts || !session.is_idle() {
        if launched < casts && rng.gen_bool(0.25) {
            let origin = Vec3::new(rng.gen_range(-50.0..50.0), rng.gen_range(-50.0..50.0), 0.0);
            let id = session
                .begin_cast(HeadlessSubject::at(origin).with_param(AuxParamKind::Opacity, 1.0));
            if let Some(cast) = session.cast_mut(id) {
                for _ in 0..rng.gen_range(1..=4) {
                    let descriptor = &spellbook[rng.gen_range(0..spellbook.len())];
                    cast.add_action(Arc::clone(descriptor), rng.gen_range(0.0..1.0))?;
                }
            }
            launched += 1;

            if rng.gen_bool(0.05) {
                session.interrupt_cast(id, &mut visuals, &curves);
            }
        }

        let report = session.tick(&mut visuals, &curves);
        counts.record(&report.events);

        if report.time.frame >= max_frames {
            bail!("stress run did not settle within {max_frames} frames");
        }
    }

    let frames = session.time().frame;
    counts.record(&session.shutdown(&mut visuals, &curves));

    if visuals.live_count() != 0 {
        bail!("{} visuals still live after shutdown", visuals.live_count());
    }
    if visuals.double_releases != 0 {
        bail!("{} visuals released twice", visuals.double_releases);
    }

    let summary = serde_json::json!({
        "seed": seed,
        "frames": frames,
        "casts": launched,
        "actions_fired": counts.actions,
        "casts_finished": counts.finished,
        "casts_interrupted": counts.interrupted,
        "flying_spawned": counts.spawned,
        "flying_expired": counts.expired,
        "visuals_created": visuals.created_count(),
    });
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}

#[derive(Default)]
struct Counts {
    actions: u64,
    finished: u64,
    interrupted: u64,
    spawned: u64,
    expired: u64,
}

impl Counts {
    fn record(&mut self, events: &[CastEvent]) {
        for event in events {
            match event {
                CastEvent::ActionFired { .. } => self.actions += 1,
                CastEvent::CastFinished { .. } => self.finished += 1,
                CastEvent::CastInterrupted { .. } => self.interrupted += 1,
                CastEvent::FlyingObjectSpawned { .. } => self.spawned += 1,
                CastEvent::FlyingObjectExpired { .. } => self.expired += 1,
                CastEvent::EffectStarted { .. } | CastEvent::EffectEnded { .. } => {}
            }
        }
    }
}

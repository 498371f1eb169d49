//! grove - headless scene placement runner
//!
//! Builds a scene holding the tree nodes, executes a placement table against
//! it and optionally keeps re-executing the table file as it is edited.

mod config;

use anyhow::{Context, Result};
use clap::Parser;
use config::{GroveConfig, DEFAULT_CONFIG_PATH};
use grove_placement::{
    execute_file, execute_table, populate_nodes, PlacementTable, ScriptReloader, ScriptRun,
};
use grove_testkit::{write_json_snapshot, MemoryScene};
use std::{
    io::{self, Write},
    path::PathBuf,
    thread,
    time::Duration,
};
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(author, version, about = "Places named tree nodes from a placement table", long_about = None)]
struct Args {
    /// Configuration file (TOML)
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Placement table (JSON or TOML); overrides the config file
    #[arg(long)]
    placements: Option<PathBuf>,

    /// Number of tree nodes to create; overrides the config file
    #[arg(long)]
    nodes: Option<usize>,

    /// Write the resulting node transforms to this JSON file
    #[arg(long)]
    snapshot: Option<PathBuf>,

    /// Keep polling the placement table and re-execute it when it changes
    #[arg(long)]
    watch: bool,

    /// Delay between polls while watching; overrides the config file
    #[arg(long)]
    poll_ms: Option<u64>,

    /// Stop watching after this many polls
    #[arg(long)]
    max_polls: Option<u64>,

    /// Run without a scene graph (the placement is skipped)
    #[arg(long)]
    no_scene: bool,

    /// Save the effective configuration back to the config file
    #[arg(long)]
    write_config: bool,
}

impl Args {
    /// Apply command-line overrides on top of the loaded config.
    fn effective_config(&self, mut config: GroveConfig) -> GroveConfig {
        if let Some(path) = &self.placements {
            config.placements = Some(path.clone());
        }
        if let Some(nodes) = self.nodes {
            config.node_count = nodes;
        }
        if let Some(poll_ms) = self.poll_ms {
            config.poll_interval_ms = poll_ms;
        }
        config
    }
}

fn main() -> Result<()> {
    // Initialize tracing with INFO level by default (can be overridden via RUST_LOG env var).
    // Logs go to stderr; stdout carries only the completion message.
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Starting grove v{}", env!("CARGO_PKG_VERSION"));

    let args = Args::parse();
    run(&args, &mut io::stdout()).map(|_| ())
}

fn run<W: Write>(args: &Args, out: &mut W) -> Result<MemoryScene> {
    let config = args.effective_config(GroveConfig::load_from_path(&args.config));
    if args.write_config {
        config
            .save_to_path(&args.config)
            .with_context(|| format!("failed to write config to {}", args.config.display()))?;
        info!(path = %args.config.display(), "wrote config");
    }

    let mut scene = MemoryScene::new();
    populate_nodes(&mut scene, &config.node_prefix, config.node_count)
        .context("failed to populate scene nodes")?;
    let present = !args.no_scene;

    let mut reloader = config.placements.as_ref().map(ScriptReloader::new);
    let first_run = match reloader.as_mut() {
        Some(reloader) => {
            let path = reloader.path().to_path_buf();
            reloader
                .poll(scene_handle(&mut scene, present), out)
                .unwrap_or_else(|| execute_file(&path, scene_handle(&mut scene, present), out))
        }
        None => execute_table(&PlacementTable::grove(), scene_handle(&mut scene, present), out),
    };

    if let Some(path) = &args.snapshot {
        write_json_snapshot(path, &scene.snapshot())
            .with_context(|| format!("failed to write snapshot to {}", path.display()))?;
        info!(path = %path.display(), "wrote transform snapshot");
    }

    if args.watch {
        match reloader.as_mut() {
            Some(reloader) => watch(
                reloader,
                &mut scene,
                present,
                Duration::from_millis(config.poll_interval_ms),
                args.max_polls,
                out,
            ),
            None => warn!("--watch has no effect without a placements file"),
        }
    } else if let ScriptRun::Failed(reason) = first_run {
        anyhow::bail!("placement run failed: {reason}");
    }

    Ok(scene)
}

fn watch<W: Write>(
    reloader: &mut ScriptReloader,
    scene: &mut MemoryScene,
    present: bool,
    interval: Duration,
    max_polls: Option<u64>,
    out: &mut W,
) {
    info!(path = %reloader.path().display(), "watching placement table");
    let mut polls = 0u64;
    while max_polls.map_or(true, |max| polls < max) {
        thread::sleep(interval);
        polls += 1;
        if let Some(run) = reloader.poll(scene_handle(scene, present), out) {
            info!(applied = run.is_applied(), "placement table re-executed");
        }
    }
}

fn scene_handle(scene: &mut MemoryScene, present: bool) -> Option<&mut MemoryScene> {
    present.then_some(scene)
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;
    use std::fs;

    fn args_from(extra: &[&str]) -> Args {
        let mut argv = vec!["grove"];
        argv.extend_from_slice(extra);
        Args::try_parse_from(argv).expect("args")
    }

    #[test]
    fn defaults_use_config_path_and_no_overrides() {
        let args = args_from(&[]);
        assert_eq!(args.config, PathBuf::from(DEFAULT_CONFIG_PATH));
        assert!(!args.watch);
        assert_eq!(args.effective_config(GroveConfig::default()), GroveConfig::default());
    }

    #[test]
    fn flags_override_config_values() {
        let args = args_from(&["--placements", "trees.toml", "--nodes", "3", "--poll-ms", "20"]);
        let cfg = args.effective_config(GroveConfig::default());
        assert_eq!(cfg.placements, Some(PathBuf::from("trees.toml")));
        assert_eq!(cfg.node_count, 3);
        assert_eq!(cfg.poll_interval_ms, 20);
    }

    #[test]
    fn builtin_grove_places_ten_trees() {
        let dir = tempfile::tempdir().unwrap();
        let config = dir.path().join("grove.toml");
        let snapshot = dir.path().join("out").join("scene.json");
        let args = args_from(&[
            "--config",
            config.to_str().unwrap(),
            "--snapshot",
            snapshot.to_str().unwrap(),
        ]);

        let mut out = Vec::new();
        let scene = run(&args, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Script has executed\n");
        assert_eq!(
            scene.transform_of("tree0").unwrap().position,
            Vec3::new(-65.37, -3.0, -40.38)
        );
        assert_eq!(scene.transform_of("tree9").unwrap().scale, Vec3::splat(2.0));

        let written = fs::read_to_string(&snapshot).unwrap();
        assert!(written.contains("\"tree9\""));
    }

    #[test]
    fn missing_node_fails_the_run() {
        let dir = tempfile::tempdir().unwrap();
        let config = dir.path().join("grove.toml");
        let args = args_from(&["--config", config.to_str().unwrap(), "--nodes", "5"]);
        let mut out = Vec::new();
        let err = run(&args, &mut out).unwrap_err();
        assert!(err.to_string().contains("tree5"), "{err:#}");
        assert!(out.is_empty());
    }

    #[test]
    fn no_scene_skips_placement() {
        let dir = tempfile::tempdir().unwrap();
        let config = dir.path().join("grove.toml");
        let args = args_from(&["--config", config.to_str().unwrap(), "--no-scene", "--nodes", "0"]);
        let mut out = Vec::new();
        let scene = run(&args, &mut out).unwrap();
        assert!(scene.lookups().is_empty());
        assert_eq!(String::from_utf8(out).unwrap(), "Script has executed\n");
    }

    #[test]
    fn watch_with_bounded_polls_returns() {
        let dir = tempfile::tempdir().unwrap();
        let config = dir.path().join("grove.toml");
        let table = dir.path().join("trees.json");
        fs::write(
            &table,
            r#"{ "node_prefix": "tree", "records": [ {"x": 1, "y": 0, "z": 0, "pitch": 0, "roll": 0, "scale": 1} ] }"#,
        )
        .unwrap();
        let args = args_from(&[
            "--config",
            config.to_str().unwrap(),
            "--placements",
            table.to_str().unwrap(),
            "--watch",
            "--poll-ms",
            "1",
            "--max-polls",
            "2",
        ]);
        let mut out = Vec::new();
        let scene = run(&args, &mut out).unwrap();
        assert_eq!(scene.transform_of("tree0").unwrap().position, Vec3::X);
        assert_eq!(String::from_utf8(out).unwrap(), "Script has executed\n");
        assert_eq!(scene.lookups(), vec!["tree0"]);
    }

    #[test]
    fn write_config_persists_overrides() {
        let dir = tempfile::tempdir().unwrap();
        let config = dir.path().join("grove.toml");
        let args = args_from(&[
            "--config",
            config.to_str().unwrap(),
            "--nodes",
            "12",
            "--write-config",
        ]);
        run(&args, &mut io::sink()).unwrap();
        assert_eq!(GroveConfig::load_from_path(&config).node_count, 12);
    }
}

// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `hush run <scenario>` - Replay host signals against a fresh runtime

use crate::output::{self, OutputFormat};
use crate::scenario::{parse_line, Action, ScenarioError, Step};
use anyhow::{Context, Result};
use clap::Args;
use hush_adapters::{
    EffectDriver, FlagDriver, HostAdapter, NoOpHostAdapter, TracedDriver, TracedHost,
};
use hush_core::{HushConfig, IdGen, SequentialIdGen};
use hush_engine::{Runtime, RuntimeDeps};
use std::ffi::OsStr;
use std::path::PathBuf;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;

#[derive(Args)]
pub struct RunArgs {
    /// Scenario file, or `-` for stdin
    pub scenario: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Tear down every handler after the last step
    #[arg(long)]
    pub teardown: bool,
}

type ScenarioRuntime =
    Runtime<TracedDriver<FlagDriver>, TracedHost<NoOpHostAdapter>, SequentialIdGen>;

pub async fn run(args: RunArgs, config: &HushConfig) -> Result<()> {
    let (tx, mut rx) = mpsc::channel(64);
    let reader = tokio::spawn(read_steps(args.scenario.clone(), tx));

    let flag = FlagDriver::new();
    let driver = flag.clone();
    let mut runtime: ScenarioRuntime = Runtime::new(
        RuntimeDeps {
            driver: Box::new(move || TracedDriver::new(driver.clone())),
            host: TracedHost::new(NoOpHostAdapter::new()),
        },
        SequentialIdGen::default(),
        config,
    );

    // Steps arrive one at a time; each is fully applied before the next.
    let mut applied = 0usize;
    while let Some(step) = rx.recv().await {
        let step = step?;
        let line = step.line;
        apply_step(&mut runtime, step, args.format).with_context(|| format!("line {}", line))?;
        applied += 1;
    }
    reader.await??;
    tracing::debug!(steps = applied, live = runtime.len(), "scenario replayed");

    if args.teardown {
        for event in runtime.shutdown() {
            println!("{}", output::render_event(&event, args.format)?);
        }
    }

    println!(
        "{}",
        output::render_summary(runtime.holder(), flag.is_running(), args.format)?
    );
    Ok(())
}

fn apply_step<D, H, I>(
    runtime: &mut Runtime<D, H, I>,
    step: Step,
    format: OutputFormat,
) -> Result<()>
where
    D: EffectDriver,
    H: HostAdapter,
    I: IdGen,
{
    let events = match step.action {
        Action::Create => runtime.create(step.handler)?,
        Action::Signal(signal) => runtime.signal(&step.handler, signal)?,
        Action::Command(text) => {
            let (response, events) = runtime.command(&step.handler, &text)?;
            println!(
                "{}",
                output::render_response(&step.handler, &response, format)?
            );
            events
        }
    };

    for event in &events {
        println!("{}", output::render_event(event, format)?);
    }
    Ok(())
}

async fn read_steps(
    source: PathBuf,
    tx: mpsc::Sender<Result<Step, ScenarioError>>,
) -> Result<(), ScenarioError> {
    let input: Box<dyn AsyncBufRead + Unpin + Send> = if source.as_os_str() == OsStr::new("-") {
        Box::new(BufReader::new(tokio::io::stdin()))
    } else {
        Box::new(BufReader::new(tokio::fs::File::open(&source).await?))
    };

    let mut lines = input.lines();
    let mut line = 0;
    while let Some(text) = lines.next_line().await? {
        line += 1;
        let parsed = match parse_line(line, &text) {
            Ok(Some(step)) => Ok(step),
            Ok(None) => continue,
            Err(e) => Err(e),
        };
        let stop = parsed.is_err();
        // Receiver gone means the runtime already failed
        if tx.send(parsed).await.is_err() || stop {
            break;
        }
    }
    Ok(())
}

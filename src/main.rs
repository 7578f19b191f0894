//! Native entry point: the same sandbox shell over stdin.
//!
//! Usage:
//!   sandbox-term               # interactive prompt
//!   sandbox-term -c <line>     # run one line and exit
//!   sandbox-term --json        # print every submission as a JSON line
//!   sandbox-term --fast        # skip animation delays

#[cfg(not(target_arch = "wasm32"))]
fn main() -> std::process::ExitCode {
    native::main()
}

#[cfg(target_arch = "wasm32")]
fn main() {}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::env;
    use std::io::{self, BufRead, Write};
    use std::process::ExitCode;
    use std::time::Duration;

    use futures::executor::block_on;
    use futures::future::ready;
    use sandbox_term::animation::{play, Playback};
    use sandbox_term::command::{AnimationFrame, CommandResult, FrameStyle};
    use sandbox_term::context::ShellOptions;
    use sandbox_term::session::{ShellSession, Submission};
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    struct Flags {
        json: bool,
        fast: bool,
        one_shot: Option<String>,
    }

    fn parse_flags() -> Result<Flags, String> {
        let mut flags = Flags { json: false, fast: false, one_shot: None };
        let mut args = env::args().skip(1);
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--json" => flags.json = true,
                "--fast" => flags.fast = true,
                "-c" => flags.one_shot = Some(args.next().ok_or("-c requires a command argument")?),
                "-h" | "--help" => return Err(String::new()),
                other => return Err(format!("unknown argument: {other}")),
            }
        }
        Ok(flags)
    }

    fn print_help() {
        println!("sandbox-term [--json] [--fast] [-c <line>]");
    }

    pub fn main() -> ExitCode {
        // respects RUST_LOG
        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(io::stderr))
            .with(EnvFilter::from_default_env())
            .init();

        let flags = match parse_flags() {
            Ok(flags) => flags,
            Err(msg) if msg.is_empty() => {
                print_help();
                return ExitCode::SUCCESS;
            }
            Err(msg) => {
                eprintln!("Error: {msg}");
                print_help();
                return ExitCode::FAILURE;
            }
        };

        let mut session = ShellSession::new(ShellOptions::default());
        let playback = Playback::new();

        if let Some(line) = &flags.one_shot {
            let submission = session.submit(line);
            render(&submission, &flags, &playback);
            return match submission {
                Submission::Result(ref r) if r.is_error() => ExitCode::FAILURE,
                _ => ExitCode::SUCCESS,
            };
        }

        if !flags.json {
            let boot = session.boot_frames();
            play_frames(&boot, &flags, &playback);
            session.finish_boot();
        }

        let stdin = io::stdin();
        let mut lines = stdin.lock().lines();
        loop {
            if !flags.json {
                let ctx = session.shell().context();
                print!("{} {} ", ctx.vfs.current_path(), ctx.options.prompt);
                let _ = io::stdout().flush();
            }
            let Some(Ok(line)) = lines.next() else {
                break;
            };
            let submission = session.submit(&line);
            render(&submission, &flags, &playback);
            // no page to notify here
            for event in session.shell_mut().drain_events() {
                tracing::debug!(event = event.dom_name(), "vfs event");
            }
            if session.is_closed() {
                break;
            }
        }
        ExitCode::SUCCESS
    }

    fn render(submission: &Submission, flags: &Flags, playback: &Playback) {
        if flags.json {
            match serde_json::to_string(submission) {
                Ok(line) => println!("{line}"),
                Err(e) => tracing::error!(error = %e, "couldn't serialize submission"),
            }
            return;
        }
        match submission {
            Submission::Ignored => {}
            Submission::Closed => println!("👋 Session closed."),
            Submission::ChatMessage(text) => println!("🤖 No assistant backend in this build, dropped: {text}"),
            Submission::Result(CommandResult::Clear) => {
                print!("\x1b[2J\x1b[H");
                let _ = io::stdout().flush();
            }
            Submission::Result(CommandResult::AnimatedOutput(frames)) => play_frames(frames, flags, playback),
            Submission::Result(CommandResult::ModeSwitch(mode)) => println!("🔀 {mode:?}"),
            Submission::Result(result) => {
                if let Some(text) = result.text() {
                    println!("{text}");
                }
            }
        }
    }

    fn play_frames(frames: &[AnimationFrame], flags: &Flags, playback: &Playback) {
        let ticket = playback.begin();
        let fast = flags.fast;
        let sleep = move |ms: u32| {
            if !fast {
                std::thread::sleep(Duration::from_millis(u64::from(ms)));
            }
            ready(())
        };
        block_on(play(frames, &ticket, sleep, |frame| match frame.style {
            FrameStyle::Error => eprintln!("{}", frame.text),
            _ => println!("{}", frame.text),
        }));
    }
}

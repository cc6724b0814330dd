//! Application run modes: logger init, single prompt, quiz, to-do, TUI launch.

use std::io::{self, BufRead, Write};
use std::sync::Arc;

use crate::cli::Args;
use crate::core;
use crate::core::config::Config;
use crate::core::llm::{self, RequestKind};
use crate::core::quiz::{Letter, QuizSession, QuizState, SubmitOutcome};
use crate::core::session::Session;

/// Initialize env_logger. In TUI mode, writes to file to avoid corrupting the display.
pub fn init_logger(args: &Args) {
    let log_level = args.log_level();
    let mut logger =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level));

    if args.is_tui() {
        let log_path = core::paths::cache_dir().and_then(|d| {
            std::fs::create_dir_all(&d).ok()?;
            Some(d.join(format!("{}.log", core::app::NAME)))
        });
        if let Some(path) = log_path
            && let Ok(file) = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
        {
            logger.target(env_logger::Target::Pipe(Box::new(file)));
        }
    }
    let _ = logger.try_init();
}

/// Run single prompt mode: one request, print the cleaned reply to stdout.
pub async fn run_single_prompt(
    prompt_arg: &str,
    config: &Config,
    model: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let prompt = if prompt_arg == "-" {
        io::read_to_string(io::stdin())?
    } else {
        prompt_arg.to_string()
    };

    let mut session = Session::new();
    let sent = session
        .send_user_message(&prompt)
        .ok_or("empty prompt")?;
    log::info!(
        "Subject: {}, intent: {}",
        sent.subject.as_deref().unwrap_or("none"),
        core::intent::label(sent.intent)
    );

    let raw = llm::complete(config, model, &RequestKind::Chat(sent.prompt), None).await?;
    session.receive_reply(&raw);
    if let Some(reply) = session.transcript().last() {
        println!("{}", reply.text);
    }
    Ok(())
}

/// Generate a quiz on `subject` and take it on stdin/stdout.
pub async fn run_quiz(
    subject: &str,
    config: &Config,
    model: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let subject = core::subject::capitalize(subject.trim());
    eprintln!("Generating {} quiz... Please wait.", subject);
    let raw = llm::complete(config, model, &RequestKind::Quiz(subject.clone()), None)
        .await
        .map_err(|e| format!("[Error generating quiz: {}]", e))?;

    let mut session = Session::new();
    if session.start_quiz(&subject, &raw) == 0 {
        return Err("The quiz could not be read from the model's reply. Try again.".into());
    }
    let Some(quiz) = session.quiz_mut() else {
        return Ok(());
    };
    let stdin = io::stdin();
    play_quiz(quiz, stdin.lock(), io::stdout())?;
    Ok(())
}

/// Drive a started quiz from line input. Stops early at end of input.
pub(crate) fn play_quiz<R: BufRead, W: Write>(
    quiz: &mut QuizSession,
    mut input: R,
    mut out: W,
) -> io::Result<()> {
    while let QuizState::Asking(index) = quiz.state() {
        let Some(question) = quiz.current() else { break };
        writeln!(out, "\nQ{}: {}", index + 1, question.prompt)?;
        for (letter, text) in &question.choices {
            writeln!(out, "  {}) {}", letter, text)?;
        }

        let outcome = loop {
            write!(out, "Your answer (A-D): ")?;
            out.flush()?;
            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                writeln!(out)?;
                writeln!(out, "Quiz stopped. Your score: {}", quiz.summary())?;
                return Ok(());
            }
            let selection = line.trim().parse::<Letter>().ok();
            match quiz.submit(selection) {
                SubmitOutcome::NoSelection => writeln!(out, "Please select an answer.")?,
                outcome => break outcome,
            }
        };
        if let SubmitOutcome::Graded(feedback) = outcome {
            writeln!(out, "{}", feedback.message())?;
        }
        quiz.advance();
    }
    writeln!(out, "\nQuiz complete! Your score: {}", quiz.summary())?;
    Ok(())
}

/// Generate a to-do list for `subject` and print it.
pub async fn run_todo(
    subject: &str,
    config: &Config,
    model: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let subject = core::subject::capitalize(subject.trim());
    eprintln!("Generating {} to-do list... Please wait.", subject);
    let raw = llm::complete(config, model, &RequestKind::Todo(subject.clone()), None)
        .await
        .map_err(|e| format!("[Error generating to-do list: {}]", e))?;

    let mut session = Session::new();
    session.set_generated_todos(&subject, &raw);
    println!("{} To-Do List", subject);
    for task in session.todo_list(&subject) {
        println!("[ ] {}", task.description);
    }
    Ok(())
}

/// Launch the TUI in a blocking thread. Returns on panic or IO error.
pub async fn launch_tui(config: Config, model: String) -> Result<(), Box<dyn std::error::Error>> {
    let config = Arc::new(config);
    let join_result: Result<io::Result<()>, tokio::task::JoinError> =
        tokio::task::spawn_blocking(move || crate::tui::run(config, model)).await;

    match join_result {
        Ok(io_result) => io_result?,
        Err(join_err) => {
            if let Ok(panic) = join_err.try_into_panic() {
                let msg = if let Some(s) = panic.downcast_ref::<&str>() {
                    s.to_string()
                } else if let Some(s) = panic.downcast_ref::<String>() {
                    s.clone()
                } else {
                    format!("{:?}", panic)
                };
                eprintln!("TUI panic: {}", msg);
            }
            return Err(
                Box::new(io::Error::other("TUI thread panicked")) as Box<dyn std::error::Error>
            );
        }
    }
    Ok(())
}

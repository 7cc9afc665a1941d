use colored::Colorize;
use task::api::{CmdMessage, CmdResult, MessageLevel};
use task::error::{Result, TaskError};
use task::model::{CompletedTask, PendingTask};

pub(crate) const USAGE: &str = r#"Usage :-
$ ./task add 2 hello world    # Add a new item with priority 2 and text "hello world" to the list
$ ./task ls                   # Show incomplete priority list items sorted by priority in ascending order
$ ./task del INDEX            # Delete the incomplete item with the given index
$ ./task done INDEX           # Mark the incomplete item with the given index as complete
$ ./task help                 # Show usage
$ ./task report               # Statistics"#;

pub(crate) fn print_usage() {
    println!("{}", USAGE);
}

pub(crate) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub(crate) fn error_message(err: &TaskError) -> CmdMessage {
    CmdMessage::error(format!("Error: {}", err))
}

pub(crate) fn print_error(err: &TaskError) {
    print_messages(&[error_message(err)]);
}

pub(crate) fn print_pending(tasks: &[PendingTask]) {
    for task in tasks {
        println!("{}", task);
    }
}

pub(crate) fn print_completed(tasks: &[CompletedTask]) {
    for task in tasks {
        println!("{}", task);
    }
}

pub(crate) fn print_report(result: &CmdResult) {
    let pending = result.pending_tasks();
    let completed = result.completed_tasks();

    println!("{}", format!("Pending : {}", pending.len()).bold());
    print_pending(pending);
    println!();
    println!("{}", format!("Completed : {}", completed.len()).bold());
    print_completed(completed);
}

pub(crate) fn print_json(result: &CmdResult) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(result)?);
    Ok(())
}

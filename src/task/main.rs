use clap::Parser;
use task::api::TaskApi;
use task::config::StorePaths;
use task::error::Result;
use task::store::fs::FileStore;

mod args;
mod print;
use args::{Cli, Commands, OutputFormat};
use print::{
    print_error, print_json, print_messages, print_pending, print_report, print_usage,
};

fn main() {
    if let Err(e) = run() {
        print_error(&e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: TaskApi<FileStore>,
    output: OutputFormat,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut ctx = init_context(&cli);

    match cli.command {
        Some(Commands::Add { priority, text }) => handle_add(&mut ctx, priority, text),
        Some(Commands::Ls { .. }) => handle_list(&ctx),
        Some(Commands::Del { position }) => handle_delete(&mut ctx, position),
        Some(Commands::Done { position }) => handle_done(&mut ctx, position),
        Some(Commands::Report { .. }) => handle_report(&ctx),
        Some(Commands::Help) | Some(Commands::Other(_)) | None => {
            print_usage();
            Ok(())
        }
    }
}

fn init_context(cli: &Cli) -> AppContext {
    let paths = StorePaths::resolve(cli.dir.clone());
    if cli.verbose {
        print_messages(&[
            task::api::CmdMessage::info(format!("pending: {}", paths.pending().display())),
            task::api::CmdMessage::info(format!("completed: {}", paths.completed().display())),
        ]);
    }

    AppContext {
        api: TaskApi::new(FileStore::new(paths)),
        output: cli.output,
    }
}

fn handle_add(ctx: &mut AppContext, priority: Option<String>, text: Vec<String>) -> Result<()> {
    let result = ctx.api.add_task(priority.as_deref(), &text)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.list_tasks()?;
    match ctx.output {
        OutputFormat::Json => print_json(&result),
        OutputFormat::Text => {
            print_messages(&result.messages);
            print_pending(result.pending_tasks());
            Ok(())
        }
    }
}

fn handle_delete(ctx: &mut AppContext, position: Option<String>) -> Result<()> {
    let result = ctx.api.delete_task(position.as_deref())?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_done(ctx: &mut AppContext, position: Option<String>) -> Result<()> {
    let result = ctx.api.complete_task(position.as_deref())?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_report(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.report()?;
    match ctx.output {
        OutputFormat::Json => print_json(&result),
        OutputFormat::Text => {
            print_messages(&result.messages);
            print_report(&result);
            Ok(())
        }
    }
}

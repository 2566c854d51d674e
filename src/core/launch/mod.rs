pub mod exit;
pub mod opener;
pub mod steamcmd;
pub mod task;

pub use exit::{classify_exit, ExitOutcome, STEAMCMD_BENIGN_EXIT};
pub use opener::open_folder;
pub use steamcmd::install_app;
pub use task::run_server;

/// Render a command as a copy/paste-able shell line for debug logs. The
/// argument following any flag in `secret_flags` is masked.
pub(crate) fn format_command_for_logs(cmd: &std::process::Command, secret_flags: &[&str]) -> String {
    let program = shell_escape(&cmd.get_program().to_string_lossy());
    let mut masked_next = false;
    let args = cmd
        .get_args()
        .map(|arg| {
            let arg = arg.to_string_lossy();
            let rendered = if masked_next {
                "********".to_string()
            } else {
                shell_escape(&arg)
            };
            masked_next = secret_flags.contains(&arg.as_ref());
            rendered
        })
        .collect::<Vec<_>>()
        .join(" ");

    if args.is_empty() {
        program
    } else {
        format!("{} {}", program, args)
    }
}

fn shell_escape(raw: &str) -> String {
    if raw.is_empty() {
        return "\"\"".to_string();
    }

    if raw.chars().all(|ch| {
        ch.is_ascii_alphanumeric() || matches!(ch, '-' | '_' | '.' | '/' | ':' | '\\' | '=' | '+')
    }) {
        return raw.to_string();
    }

    format!("\"{}\"", raw.replace('"', "\\\""))
}

use crate::shell::ast::ParsedCommand;
use crate::shell::commands::Executable;
use crate::shell::commands::builtins::dispatch_builtin;
use crate::shell::commands::builtins::env::cd::CdCommand;
use crate::shell::context::ShellContext;
use crate::shell::parser::parse_command;
use crate::shell::resolver::resolve;
use crate::shell::search_path::SearchPath;
use crate::shell::run_line;
use std::env;

fn args(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

fn default_ctx() -> ShellContext {
    ShellContext::new(SearchPath::new(["/bin"]))
}

#[test]
fn test_builtins_are_registered() {
    let ctx = default_ctx();
    for name in ["exit", "cd", "path"] {
        assert!(ctx.registry.contains_key(name), "{} should be a built-in", name);
    }
    assert!(!ctx.registry.contains_key("ls"));
    assert!(!ctx.registry.contains_key("CD"));
}

#[test]
fn test_path_replaces_search_path() {
    let mut ctx = default_ctx();
    run_line("path /usr/local/bin /usr/bin", &mut ctx).unwrap();
    assert_eq!(ctx.search_path.list(), ["/usr/local/bin", "/usr/bin"]);
}

#[test]
fn test_path_without_arguments_disables_lookup() {
    let mut ctx = default_ctx();
    run_line("path\n", &mut ctx).unwrap();
    assert!(ctx.search_path.is_empty());
    assert_eq!(resolve("sh", &ctx.search_path), None);

    run_line("path /bin", &mut ctx).unwrap();
    assert!(resolve("sh", &ctx.search_path).is_some());
}

#[test]
fn test_cd_to_missing_directory_keeps_cwd() {
    let mut ctx = default_ctx();
    let before = env::current_dir().unwrap();
    let res = CdCommand.execute(&args(&["cd", "/no/such/dir/for/wish"]), &mut ctx);
    assert!(res.is_err());
    assert_eq!(env::current_dir().unwrap(), before);
}

#[test]
fn test_cd_argument_count() {
    let mut ctx = default_ctx();
    let before = env::current_dir().unwrap();
    assert!(CdCommand.execute(&args(&["cd"]), &mut ctx).is_err());
    assert!(CdCommand.execute(&args(&["cd", "/", "/tmp"]), &mut ctx).is_err());
    assert_eq!(env::current_dir().unwrap(), before);
}

#[test]
fn test_cd_to_current_directory() {
    let mut ctx = default_ctx();
    let here = env::current_dir().unwrap();
    let target = here.to_string_lossy().into_owned();
    CdCommand.execute(&args(&["cd", target.as_str()]), &mut ctx).unwrap();
    assert_eq!(env::current_dir().unwrap(), here);
}

#[test]
fn test_dispatch_reports_unknown_names() {
    let mut ctx = default_ctx();
    let cmd = parse_command("ls -la").unwrap();
    assert!(!dispatch_builtin(&cmd, &mut ctx).unwrap());
}

#[test]
fn test_dispatch_rejects_redirected_builtin() {
    let mut ctx = default_ctx();
    let cmd = ParsedCommand {
        argv: args(&["path", "/usr/bin"]),
        redirect: Some("out.txt".to_string()),
    };
    assert!(dispatch_builtin(&cmd, &mut ctx).is_err());
    assert_eq!(ctx.search_path.list(), ["/bin"]);
}

#[test]
fn test_blank_and_separator_lines_are_ignored() {
    let mut ctx = default_ctx();
    for line in ["\n", "   \t", "&", " & & \n"] {
        assert!(run_line(line, &mut ctx).is_ok());
    }
    assert_eq!(ctx.search_path.list(), ["/bin"]);
}

#[test]
fn test_non_fatal_errors_do_not_escape_run_line() {
    let mut ctx = default_ctx();
    assert!(run_line("no-such-command-here", &mut ctx).is_ok());
    assert!(run_line("cd", &mut ctx).is_ok());
    assert!(run_line("exit now", &mut ctx).is_ok());
    assert!(run_line("ls > a b", &mut ctx).is_ok());
}

#[test]
fn test_malformed_slot_does_not_drop_valid_command() {
    let mut ctx = default_ctx();
    // Only one valid command remains, so it runs in-process
    run_line("& path /opt/bin", &mut ctx).unwrap();
    assert_eq!(ctx.search_path.list(), ["/opt/bin"]);
}

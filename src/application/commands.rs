//! Argv builders for the external tools
//!
//! Every command is an argv vector; nothing is passed through a shell.
//! Host commands that touch the checkout run as the deploying user via
//! `sudo -u`, container commands via `docker exec -u`.

use std::path::Path;

use crate::domain::ports::CommandSpec;

pub(crate) fn path_arg(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

/// `sudo -u <user> <program>` with the project directory as cwd
pub fn as_user(user: &str, dir: &Path, program: &str) -> CommandSpec {
    CommandSpec::new("sudo")
        .args(["-u", user, program])
        .current_dir(dir)
}

/// `sudo -u <user> git -C <repo>`
pub fn git(user: &str, repo: &Path) -> CommandSpec {
    CommandSpec::new("sudo")
        .args(["-u", user, "git", "-C"])
        .arg(path_arg(repo))
}

/// `docker exec [-u <user>] [-w <workdir>] <container> <program>`
pub fn in_container(
    container: &str,
    user: Option<&str>,
    workdir: Option<&Path>,
    program: &str,
) -> CommandSpec {
    let mut spec = CommandSpec::new("docker").arg("exec");
    if let Some(user) = user {
        spec = spec.args(["-u", user]);
    }
    if let Some(dir) = workdir {
        spec = spec.arg("-w").arg(path_arg(dir));
    }
    spec.args([container, program])
}

/// `<php> <path>/artisan <args...>`, in the container when one is set
pub fn artisan<'a>(
    container: Option<&str>,
    user: &str,
    project_dir: &Path,
    php: &str,
    args: impl IntoIterator<Item = &'a str>,
) -> CommandSpec {
    let script = path_arg(&project_dir.join(crate::domain::value_objects::ARTISAN));
    let base = match container {
        Some(container) => in_container(container, Some(user), None, php),
        None => as_user(user, project_dir, php),
    };
    base.arg(script).args(args)
}

//! `cd` changes the working directory of the whole process, so these tests
//! run serially and restore the original directory when done.

use std::env;
use std::fs;
use std::path::PathBuf;

use cmdsh_builtins::standard_registry;
use cmdsh_core::{Console, Dispatcher};
use cmdsh_hal::StaticSystemInfo;
use serial_test::serial;

struct RestoreCwd(PathBuf);

impl Drop for RestoreCwd {
    fn drop(&mut self) {
        let _ = env::set_current_dir(&self.0);
    }
}

#[test]
#[serial]
fn cd_then_relative_commands_use_the_new_directory() {
    let _restore = RestoreCwd(env::current_dir().unwrap());
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path().canonicalize().unwrap();
    fs::create_dir(root.join("inner")).unwrap();

    let (console, output) = Console::captured();
    let mut d = Dispatcher::new(standard_registry(), console, Box::new(StaticSystemInfo::default()));

    d.dispatch(&format!("cd {}", root.join("inner").display()));
    assert_eq!(output.stderr(), "");
    assert_eq!(env::current_dir().unwrap().canonicalize().unwrap(), root.join("inner"));

    d.dispatch("create here.txt");
    assert!(root.join("inner/here.txt").exists());

    d.dispatch("cd ..");
    output.clear();
    d.dispatch("dir");
    assert_eq!(output.stdout(), "[DIR] inner\n");
}

#[test]
#[serial]
fn cd_to_missing_path_keeps_the_directory() {
    let _restore = RestoreCwd(env::current_dir().unwrap());
    let before = env::current_dir().unwrap();
    let (console, output) = Console::captured();
    let mut d = Dispatcher::new(standard_registry(), console, Box::new(StaticSystemInfo::default()));

    d.dispatch("cd definitely/not/here");
    assert!(output.stderr().starts_with("cannot change directory to"));
    assert_eq!(env::current_dir().unwrap(), before);
}

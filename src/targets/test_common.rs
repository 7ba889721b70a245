//! Shared tests for the Target trait contract.
//!
//! Every target is rendered against the same fixture bookmarks so that a
//! regression in one renderer's protocol handling shows up next to the
//! others. Format-specific assertions stay in the target modules.

use super::*;
use crate::ini::IniDocument;
use std::path::Path;

fn all_targets() -> Vec<Box<dyn Target>> {
    vec![
        Box::new(RemminaTarget::new("/out/remmina")),
        Box::new(PuttyTarget::new("/out/putty")),
        Box::new(RabbitTarget::with_favorites(
            RabbitLayout::new("/out/rabbit"),
            IniDocument::parse("[General]\nRootCount=0\n"),
        )),
    ]
}

/// Tests that all targets have valid, unique info.
#[test]
fn test_all_targets_have_valid_info() {
    let targets = all_targets();
    let mut names: Vec<&str> = targets.iter().map(|t| t.info().name).collect();

    for target in &targets {
        let info = target.info();
        assert!(!info.name.is_empty(), "Target name should not be empty");
        assert!(
            !info.description.is_empty(),
            "Target {} description should not be empty",
            info.name
        );
    }

    let original_count = names.len();
    names.sort();
    names.dedup();
    assert_eq!(names.len(), original_count, "Target names should be unique");
}

/// Tests that SSH and Telnet bookmarks render for every target.
#[test]
fn test_all_targets_render_supported_protocols() {
    for target in all_targets() {
        for bookmark in [
            fixtures::ssh_with_key(),
            fixtures::ssh_password(),
            fixtures::telnet(),
        ] {
            let session = target.render(&bookmark).unwrap_or_else(|| {
                panic!(
                    "Target {} should render {:?}",
                    target.info().name,
                    bookmark.protocol
                )
            });
            assert!(!session.content.is_empty());
            assert!(session.content.ends_with('\n'));
            assert!(session.content.contains(&bookmark.host));
        }
    }
}

/// Tests that key files are never written for Telnet sessions.
#[test]
fn test_all_targets_ignore_telnet_key_path() {
    let bookmark = fixtures::telnet_with_key();
    let key = bookmark.key_path.clone().expect("fixture has a key");

    for target in all_targets() {
        let session = target.render(&bookmark).expect("telnet renders");
        assert!(
            !session.content.contains(&key),
            "Target {} leaked a key path into a Telnet session",
            target.info().name
        );
        assert_eq!(
            target.render(&bookmark).map(|s| s.content),
            target.render(&fixtures::telnet()).map(|s| s.content),
            "Target {} should render Telnet the same with or without a key",
            target.info().name
        );
    }
}

/// Tests that unknown protocols are skipped rather than rendered as SSH.
#[test]
fn test_all_targets_skip_unknown_protocol() {
    for target in all_targets() {
        assert!(
            target.render(&fixtures::unknown()).is_none(),
            "Target {} should skip unknown protocols",
            target.info().name
        );
    }
}

/// Tests that output files land directly inside the output directory.
#[test]
fn test_all_targets_write_inside_output_dir() {
    for target in all_targets() {
        for bookmark in [fixtures::ssh_with_key(), fixtures::telnet()] {
            let session = target.render(&bookmark).expect("supported protocol");
            assert_eq!(
                session.path.parent(),
                Some(target.output_dir()),
                "Target {} wrote outside its directory",
                target.info().name
            );
            let file_name = session
                .path
                .file_name()
                .and_then(|n| n.to_str())
                .expect("file name");
            assert!(!file_name.contains('/'));
            assert!(!Path::new(file_name).is_absolute());
        }
    }
}

/// Tests that rendering is deterministic for a given target state.
#[test]
fn test_all_targets_render_deterministically() {
    for target in all_targets() {
        let bookmark = fixtures::ssh_with_key();
        assert_eq!(target.render(&bookmark), target.render(&bookmark));
    }
}

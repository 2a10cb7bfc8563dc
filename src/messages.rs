//! Human-readable messages for every link-check code.
//!
//! Both tables are exhaustive `match`es over the closed enumerations, so a
//! new code cannot be added to the engine without the compiler demanding a
//! message for it.

use crate::engine::{AnchorCheckCode, CheckCode, FileCheckCode};

pub fn message(code: CheckCode) -> &'static str {
    match code {
        CheckCode::File(code) => file_message(code),
        CheckCode::Anchor(code) => anchor_message(code),
    }
}

pub fn file_message(code: FileCheckCode) -> &'static str {
    match code {
        FileCheckCode::Success => "No error.",
        FileCheckCode::NotExists => "Link references a file that does not exist.",
        FileCheckCode::OutsideBase => {
            "Link references a file that exists outside of the base directory."
        }
        FileCheckCode::SameFile => "Link references the file it is in.",
    }
}

pub fn anchor_message(code: AnchorCheckCode) -> &'static str {
    match code {
        AnchorCheckCode::EmptyAnchor => "Link includes an empty anchor.",
        AnchorCheckCode::BinaryFile => {
            "Link targets a binary file, which means there is no useful way to target \
             individual sections of the file with an anchor."
        }
        AnchorCheckCode::Undiscoverable => {
            "Link targets a file with no file extension, so it cannot be determined if \
             the anchor is valid."
        }
        AnchorCheckCode::UnsupportedFiletype => {
            "Link targets a non-document file with an anchor that isn't supported for \
             non-document files."
        }
        AnchorCheckCode::HeadingMatch => "No error.",
        AnchorCheckCode::HeadingFail => "Link references a non-existent header.",
        AnchorCheckCode::LineMatch => "No error.",
        AnchorCheckCode::LineFail => "Link references a non-existent line number.",
        AnchorCheckCode::LineInvalid => "Link anchor contains invalid line number reference.",
        AnchorCheckCode::LineRangeInvalid => {
            "The start number of a multi-line anchor must be less than the end number."
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_codes_have_no_error_message() {
        assert_eq!(file_message(FileCheckCode::Success), "No error.");
        assert_eq!(anchor_message(AnchorCheckCode::HeadingMatch), "No error.");
        assert_eq!(anchor_message(AnchorCheckCode::LineMatch), "No error.");
    }

    #[test]
    fn test_message_dispatches_on_tag() {
        assert_eq!(
            message(CheckCode::File(FileCheckCode::NotExists)),
            "Link references a file that does not exist."
        );
        assert_eq!(
            message(CheckCode::Anchor(AnchorCheckCode::HeadingFail)),
            "Link references a non-existent header."
        );
    }
}

//! CLI parsing tests for get command using the test DSL.

#[cfg(test)]
mod tests {
    use crate::cli::Args;
    use clap::Parser;
    use rstest::rstest;

    crate::cli_required_arg_test! {
        command: "get",
        test_name: test_requires_key,
        required_arg: "<KEY>",
    }

    crate::cli_option_test! {
        command: "get",
        variant: Get,
        test_name: test_with_key,
        args: ["ddd"],
        field: key,
        expected: "ddd",
    }

    crate::cli_error_test! {
        command: "get",
        test_name: test_rejects_two_keys,
        args: ["a", "b"],
    }
}

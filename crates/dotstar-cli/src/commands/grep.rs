use std::{
    io::{BufRead, Write},
    process::ExitCode,
    string::FromUtf8Error,
    time::Duration,
};

use dotstar::{MatcherOptions, TextMatcher};

use crate::{
    input_output::{InputArgs, OutputArgs},
    logging::LogArgs,
};

/// Lines handed to the matcher per batch.
const BATCH_SIZE: usize = 1024;

/// Args for the grep command.
#[derive(clap::Args, Debug)]
pub struct GrepArgs {
    /// The pattern to match.
    pub pattern: String,

    /// Print only the number of selected lines.
    #[clap(short, long)]
    pub count: bool,

    /// Select the lines that do not match.
    #[clap(short = 'I', long)]
    pub invert: bool,

    /// Prefix each selected line with its 1-based line number.
    #[clap(short = 'n', long)]
    pub line_number: bool,

    /// Match each batch of lines in parallel.
    #[clap(long)]
    pub parallel: bool,

    /// Per-line wall-clock limit, in milliseconds.
    #[arg(long)]
    pub timeout_ms: Option<u64>,

    /// Per-line step limit.
    #[arg(long)]
    pub max_steps: Option<usize>,

    /// Reject patterns containing a literal `*`, `^` or `$`.
    #[clap(long)]
    pub strict: bool,

    #[command(flatten)]
    pub input: InputArgs,

    #[command(flatten)]
    pub output: OutputArgs,

    #[clap(flatten)]
    pub logging: LogArgs,
}

impl GrepArgs {
    /// The matcher configuration selected by the flags.
    pub fn matcher_options(&self) -> MatcherOptions {
        MatcherOptions::default()
            .with_deadline(self.timeout_ms.map(Duration::from_millis))
            .with_max_steps(self.max_steps)
            .with_parallel(self.parallel)
            .with_strict(self.strict)
    }

    /// Run the grep command.
    pub fn run(&self) -> Result<ExitCode, Box<dyn std::error::Error>> {
        self.logging.setup_logging(2)?;

        let matcher = self.matcher_options().build(self.pattern.as_str())?;
        log::debug!("{matcher:?}");

        let mut reader = self.input.open_reader()?;
        let mut writer = self.output.open_writer()?;

        let selected = self.grep_lines(matcher.as_ref(), &mut reader, &mut writer)?;
        writer.flush()?;

        Ok(if selected > 0 {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        })
    }

    /// Filter `reader` into `writer`.
    ///
    /// Lines that are not UTF-8, and lines whose budget runs out, are
    /// logged and never selected.
    ///
    /// ## Returns
    /// The number of selected lines.
    fn grep_lines(
        &self,
        matcher: &dyn TextMatcher,
        reader: &mut dyn BufRead,
        writer: &mut dyn Write,
    ) -> Result<usize, Box<dyn std::error::Error>> {
        let mut selected = 0;
        let mut line_no = 0;
        let mut eof = false;

        while !eof {
            let mut numbered: Vec<(usize, String)> = Vec::with_capacity(BATCH_SIZE);
            while numbered.len() < BATCH_SIZE {
                let Some(line) = read_line(reader)? else {
                    eof = true;
                    break;
                };
                line_no += 1;
                match line {
                    Ok(text) => numbered.push((line_no, text)),
                    Err(err) => log::warn!("line {line_no}: {err}; skipping"),
                }
            }
            if numbered.is_empty() {
                continue;
            }

            let batch: Vec<&str> = numbered.iter().map(|(_, text)| text.as_str()).collect();
            for ((line_no, text), result) in numbered.iter().zip(matcher.try_match_batch(&batch)) {
                let matched = match result {
                    Ok(matched) => matched,
                    Err(err) if err.is_budget_exhausted() => {
                        log::warn!("line {line_no}: {err}; skipping");
                        continue;
                    }
                    Err(err) => return Err(err.into()),
                };
                if matched == self.invert {
                    continue;
                }

                selected += 1;
                if self.count {
                    continue;
                }
                if self.line_number {
                    write!(writer, "{line_no}:")?;
                }
                writeln!(writer, "{text}")?;
            }
        }

        if self.count {
            writeln!(writer, "{selected}")?;
        }
        Ok(selected)
    }
}

/// Read one line, without its `\n` or `\r\n` ending.
///
/// ## Returns
/// `None` at end of input; `Some(Err(_))` for a line that is not UTF-8.
fn read_line(reader: &mut dyn BufRead) -> std::io::Result<Option<Result<String, FromUtf8Error>>> {
    let mut buf = Vec::new();
    if reader.read_until(b'\n', &mut buf)? == 0 {
        return Ok(None);
    }
    if buf.last() == Some(&b'\n') {
        buf.pop();
        if buf.last() == Some(&b'\r') {
            buf.pop();
        }
    }
    Ok(Some(String::from_utf8(buf)))
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use clap::Parser;

    use super::*;

    #[derive(clap::Parser, Debug)]
    struct Harness {
        #[clap(flatten)]
        grep: GrepArgs,
    }

    fn grep(
        args: &[&str],
        input: &str,
    ) -> (usize, String) {
        grep_bytes(args, input.as_bytes())
    }

    fn grep_bytes(
        args: &[&str],
        input: &[u8],
    ) -> (usize, String) {
        let argv = std::iter::once("grep").chain(args.iter().copied());
        let args = Harness::try_parse_from(argv).unwrap().grep;
        let matcher = args.matcher_options().build(args.pattern.as_str()).unwrap();

        let mut reader = Cursor::new(input);
        let mut out = Vec::new();
        let selected = args
            .grep_lines(matcher.as_ref(), &mut reader, &mut out)
            .unwrap();
        (selected, String::from_utf8(out).unwrap())
    }

    const INPUT: &str = "apple\nbanana\ncherry\navocado\n";

    #[test]
    fn test_select_lines() {
        assert_eq!(grep(&["^a"], INPUT), (2, "apple\navocado\n".to_string()));
        assert_eq!(grep(&["an.n"], INPUT), (1, "banana\n".to_string()));
        assert_eq!(grep(&["zz"], INPUT), (0, String::new()));
    }

    #[test]
    fn test_flags() {
        assert_eq!(
            grep(&["-I", "^a"], INPUT),
            (2, "banana\ncherry\n".to_string())
        );
        assert_eq!(grep(&["-c", "a$"], INPUT), (1, "1\n".to_string()));
        assert_eq!(
            grep(&["-n", "rr*y$"], INPUT),
            (1, "3:cherry\n".to_string())
        );
        assert_eq!(
            grep(&["--parallel", "-n", "o"], INPUT),
            (1, "4:avocado\n".to_string())
        );
    }

    #[test]
    fn test_exhausted_lines_are_skipped() {
        let input = format!("ab\n{}\nb\n", "a".repeat(24));

        let (selected, out) = grep(&["--max-steps", "50", "a*a*a*a*a*a*b"], &input);
        assert_eq!(selected, 2);
        assert_eq!(out, "ab\nb\n");

        let (selected, out) = grep(&["--max-steps", "50", "-I", "a*a*a*a*a*a*b"], &input);
        assert_eq!(selected, 0);
        assert_eq!(out, "");
    }

    #[test]
    fn test_invalid_utf8_lines_are_skipped() {
        let input = b"apple\n\xff\xfe\navocado\n";
        assert_eq!(
            grep_bytes(&["-n", "a"], input),
            (2, "1:apple\n3:avocado\n".to_string())
        );
        assert_eq!(grep_bytes(&["-I", "-c", "a"], input), (0, "0\n".to_string()));
    }

    #[test]
    fn test_line_endings() {
        assert_eq!(
            grep(&["-n", "e$"], "apple\r\nbanana\r\ngrape"),
            (2, "1:apple\n3:grape\n".to_string())
        );
        assert_eq!(grep(&["-c", "x"], ""), (0, "0\n".to_string()));
    }

    #[test]
    fn test_strict_rejects_pattern() {
        let args = Harness::try_parse_from(["grep", "--strict", "a$b"])
            .unwrap()
            .grep;
        assert!(args.matcher_options().build(args.pattern.as_str()).is_err());
    }
}

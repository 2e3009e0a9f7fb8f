//! CLI program for playing with sets of natural numbers.
//!
//! Run with --help for usage and options.

#![deny(rustdoc::all)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::cargo)]

mod io;

use clap::Parser;
use color_eyre::{
    eyre::{eyre, Context},
    Result,
};
use natset::{parse_members, BitSet};
use std::{io::Write, path::PathBuf};

/// Renders a member list the same way `BitSet` does, without truncation
fn braces(members: &[usize]) -> String {
    let members: Vec<String> = members.iter().map(ToString::to_string).collect();
    format!("{{{}}}", members.join(", "))
}

/// One line describing `set`, e.g. `3 is the size of A = {1, 2, 3}`
fn report(out: &mut impl Write, name: &str, set: &BitSet) -> std::io::Result<()> {
    writeln!(out, "{} is the size of {name} = {set}", set.size())
}

/// Builds the sets A to K over `[0, 1000]` and exercises every operation on them
fn walkthrough(out: &mut impl Write) -> Result<()> {
    const MAX: usize = 1000;

    // Powers of two and their neighbours
    let mut a = BitSet::new(MAX);
    let mut i = 1;
    while i < MAX {
        a.extend([i - 1, i, i + 1]);
        i += i;
    }
    // Powers of two
    let b = BitSet::from_members(MAX, (0..).map(|p| 1 << p).take_while(|i| *i < MAX));
    // Odd numbers
    let c = BitSet::from_members(MAX, (1..MAX).step_by(2));

    writeln!(out, "Getting C's complement")?;
    let d = c.complement();
    writeln!(out, "Getting D union B")?;
    let e = d.union(&b);
    let verdict = |equal: bool| if equal { "is equal to" } else { "is not equal to" };
    writeln!(out, "D {} E", verdict(d.equal(&e)))?;

    let f = a.intersect(&b);
    writeln!(out, "B {} F", verdict(b.equal(&f)))?;

    // Multiples of 8
    let g = BitSet::from_members(MAX, (0..MAX).step_by(8));
    let mut h = a.intersect(&g);
    writeln!(out, "G {} H", verdict(g.equal(&h)))?;

    let i = g.subtract(&d);
    let emptiness = if i.is_empty() { "empty" } else { "not empty" };
    writeln!(out, "I is {emptiness}")?;

    let j = h.intersect(&e);
    let k = h.complement();

    for (name, set) in [
        ("A", &a),
        ("B", &b),
        ("C", &c),
        ("D", &d),
        ("E", &e),
        ("F", &f),
        ("G", &g),
        ("H", &h),
        ("I", &i),
        ("J", &j),
        ("K", &k),
    ] {
        report(out, name, set)?;
    }

    h.delete(16);
    writeln!(out, "H = {h}")?;

    if b.is_subset(&a) {
        writeln!(out, "B is a subset of A")?;
    }
    if a.is_subset(&b) {
        writeln!(out, "A is a subset of B")?;
    }

    writeln!(out, "All subsets of H:")?;
    for subset in h.subsets()? {
        writeln!(out, "{}", braces(&subset))?;
    }
    Ok(())
}

#[derive(Parser)]
struct Demo {
    /// Write to this file instead of stdout
    #[clap(short, long, parse(from_os_str))]
    output: Option<PathBuf>,
}

impl Demo {
    fn run(self) -> Result<()> {
        let mut output = io::Output::try_from(self.output)?;
        let target = output.to_string();
        let mut out = output.writer();
        walkthrough(&mut out).wrap_err(format!("Cannot write the walkthrough to {target}"))?;
        out.flush()?;
        Ok(())
    }
}

#[derive(Parser)]
struct Show {
    /// Largest number in the universe
    #[clap(short, long, default_value_t = 1000)]
    max: usize,
    /// Read the members from this file instead of stdin
    #[clap(short, long, parse(from_os_str))]
    input: Option<PathBuf>,
    /// Write to this file instead of stdout
    #[clap(short, long, parse(from_os_str))]
    output: Option<PathBuf>,
}

impl Show {
    fn run(self) -> Result<()> {
        let members = io::Input::try_from(self.input)?.read_members()?;
        let set = BitSet::from_members(self.max, members);

        let mut output = io::Output::try_from(self.output)?;
        let mut out = output.writer();
        report(&mut out, "the set", &set)?;
        out.flush()?;
        Ok(())
    }
}

#[derive(clap::ArgEnum, Clone, Copy, Debug)]
enum Operation {
    Union,
    Intersect,
    Subtract,
    Complement,
    Equal,
    Superset,
    Subset,
}

#[derive(Parser)]
struct Eval {
    /// Largest number in the universe of both operands
    #[clap(short, long, default_value_t = 1000)]
    max: usize,
    #[clap(arg_enum)]
    op: Operation,
    /// First operand, e.g. "1, 2, 3"
    a: String,
    /// Second operand, not needed for complement
    b: Option<String>,
    /// Write to this file instead of stdout
    #[clap(short, long, parse(from_os_str))]
    output: Option<PathBuf>,
}

impl Eval {
    fn run(self) -> Result<()> {
        let a = BitSet::from_members(self.max, parse_members(&self.a)?);
        let second = || -> Result<BitSet> {
            let members = self
                .b
                .as_deref()
                .ok_or_else(|| eyre!("{:?} needs a second operand", self.op))?;
            Ok(BitSet::from_members(self.max, parse_members(members)?))
        };

        let mut output = io::Output::try_from(self.output)?;
        let mut out = output.writer();
        match self.op {
            Operation::Union => report(&mut out, "the union", &a.union(&second()?))?,
            Operation::Intersect => {
                report(&mut out, "the intersection", &a.intersect(&second()?))?;
            }
            Operation::Subtract => {
                report(&mut out, "the difference", &a.subtract(&second()?))?;
            }
            Operation::Complement => report(&mut out, "the complement", &a.complement())?,
            Operation::Equal => writeln!(out, "{}", a.equal(&second()?))?,
            Operation::Superset => writeln!(out, "{}", a.is_superset(&second()?))?,
            Operation::Subset => writeln!(out, "{}", a.is_subset(&second()?))?,
        }
        out.flush()?;
        Ok(())
    }
}

#[derive(Parser)]
struct Subsets {
    /// Largest number in the universe
    #[clap(short, long, default_value_t = 1000)]
    max: usize,
    /// Members of the set, e.g. "1, 2, 3"
    members: String,
    /// Write to this file instead of stdout
    #[clap(short, long, parse(from_os_str))]
    output: Option<PathBuf>,
}

impl Subsets {
    fn run(self) -> Result<()> {
        let set = BitSet::from_members(self.max, parse_members(&self.members)?);
        let subsets = set.subsets()?;

        let mut output = io::Output::try_from(self.output)?;
        let mut out = output.writer();
        for subset in subsets {
            writeln!(out, "{}", braces(&subset))?;
        }
        out.flush()?;
        Ok(())
    }
}

#[derive(Parser)]
struct Random {
    /// Largest number in the universe
    #[clap(short, long, default_value_t = 1000)]
    max: usize,
    /// How many distinct members to draw, at most the size of the universe
    #[clap(short, long)]
    count: usize,
    /// Write to this file instead of stdout
    #[clap(short, long, parse(from_os_str))]
    output: Option<PathBuf>,
}

impl Random {
    fn run(self) -> Result<()> {
        let mut set = BitSet::new(self.max);
        let universe = set.max() + 1;

        // Draw distinct members uniformly from the universe
        let mut rng = rand::thread_rng();
        set.extend(rand::seq::index::sample(
            &mut rng,
            universe,
            self.count.min(universe),
        ));

        let mut output = io::Output::try_from(self.output)?;
        let mut out = output.writer();
        report(&mut out, "the sample", &set)?;
        out.flush()?;
        Ok(())
    }
}

#[derive(Parser)]
#[clap(author, version, about)]
enum Opts {
    /// Build a handful of sets over [0, 1000] and exercise every operation
    Demo(Demo),
    /// Print the size and members of a set read from a file or stdin
    Show(Show),
    /// Evaluate one set operation
    Eval(Eval),
    /// List every subset of a set with fewer than 30 members
    Subsets(Subsets),
    /// Draw a random set
    Random(Random),
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let opts = Opts::parse();
    match opts {
        Opts::Demo(d) => d.run()?,
        Opts::Show(s) => s.run()?,
        Opts::Eval(e) => e.run()?,
        Opts::Subsets(s) => s.run()?,
        Opts::Random(r) => r.run()?,
    };
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn braces_renders_everything() {
        assert_eq!(braces(&[]), "{}");
        assert_eq!(braces(&[1, 2, 3]), "{1, 2, 3}");
        let many: Vec<usize> = (0..40).collect();
        assert!(!braces(&many).contains("..."));
    }

    #[test]
    fn walkthrough_output() {
        let mut buf = Vec::new();
        walkthrough(&mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        dbg!(&text);
        assert!(text.contains("D is not equal to E\n"));
        assert!(text.contains("B is equal to F\n"));
        assert!(text.contains("G is not equal to H\n"));
        assert!(text.contains("I is empty\n"));
        assert!(text.contains("27 is the size of A = "));
        assert!(text.contains("501 is the size of D = "));
        assert!(text.contains("8 is the size of H = {0, 8, 16, 32, 64, 128, 256, 512}\n"));
        assert!(text.contains("H = {0, 8, 32, 64, 128, 256, 512}\n"));
        assert!(text.contains("B is a subset of A\n"));
        assert!(!text.contains("A is a subset of B\n"));
        assert!(text.ends_with("{0, 8, 32, 64, 128, 256, 512}\n"));
        let subsets = text.split("All subsets of H:\n").nth(1).unwrap();
        assert_eq!(subsets.lines().count(), 128);
    }

    /// Writer which rejects every write
    struct Broken;

    impl Write for Broken {
        fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
            Err(std::io::ErrorKind::BrokenPipe.into())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn walkthrough_reports_write_errors() {
        assert!(walkthrough(&mut Broken).is_err());
    }

    #[test]
    fn subsets_of_large_set_is_an_error() {
        let members: Vec<String> = (0..30).map(|x| x.to_string()).collect();
        let cmd = Subsets {
            max: 100,
            members: members.join(","),
            output: None,
        };
        let err = cmd.run().unwrap_err();
        dbg!(&err);
        assert!(err.downcast_ref::<natset::EnumerateError>().is_some());
    }

    #[test]
    fn opts_parse() {
        let opts = Opts::try_parse_from(["natset", "eval", "-m", "50", "union", "1,2", "3"]);
        assert!(matches!(opts, Ok(Opts::Eval(Eval { max: 50, .. }))));
        assert!(Opts::try_parse_from(["natset", "eval", "nope", "1"]).is_err());
    }
}

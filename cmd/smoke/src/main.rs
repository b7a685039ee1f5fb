//! serror End-to-End Smoke Test
//!
//! Exercises the full raise/catch/report flow:
//!   Part A — Construction: messages fixed up front, context unset
//!   Part B — Raise sites: raise!/ensure! stamp accurate file/line
//!   Part C — Polymorphic catch: Box<dyn SiteError> reporting
//!   Part D — Copy semantics: independent stamps, truncation
//!
//! Run: cargo run -p serror-smoke

use serror::{ensure, raise, stamp, ErrorBase, SiteError, FILE_CAPACITY};

// ── Demo error kinds (the host library's side of the contract) ──

#[derive(Clone, Debug)]
struct NotFound {
    base: ErrorBase,
}

impl NotFound {
    fn new(symbol: &str) -> Self {
        Self {
            base: ErrorBase::new(format!("symbol '{symbol}' not found")),
        }
    }
}

serror::impl_site_error!(NotFound);

#[derive(Clone, Debug)]
struct BadArgument {
    base: ErrorBase,
}

impl BadArgument {
    fn new(function: &str, index: usize) -> Self {
        Self {
            base: ErrorBase::new(format!("bad argument #{index} to '{function}'")),
        }
    }
}

serror::impl_site_error!(BadArgument);

// ── Raising code under test ──

fn lookup(symbol: &str) -> Result<u32, NotFound> {
    raise!(NotFound::new(symbol));
}

fn call(function: &str, argc: usize) -> Result<(), Box<dyn SiteError>> {
    ensure!(argc <= 4, BadArgument::new(function, argc));
    raise!(NotFound::new(function));
}

// ── Test harness ──

struct TestRunner {
    total: usize,
    passed: usize,
    failed: usize,
}

const LINE: &str = "────────────────────────────────────────────────────────────";

impl TestRunner {
    fn new() -> Self {
        Self { total: 0, passed: 0, failed: 0 }
    }

    fn section(&self, name: &str) {
        println!("\n{}", LINE);
        println!("  {}", name);
        println!("{}", LINE);
    }

    fn check(&mut self, name: &str, ok: bool) {
        self.total += 1;
        if ok {
            self.passed += 1;
            println!("  [{:2}] {:<52} PASS", self.total, name);
        } else {
            self.failed += 1;
            println!("  [{:2}] {:<52} FAIL", self.total, name);
        }
    }

    fn summary(&self) -> i32 {
        println!("\n{}", LINE);
        println!(
            "  total: {}   passed: {}   failed: {}",
            self.total, self.passed, self.failed
        );
        println!("{}", LINE);
        if self.failed == 0 {
            0
        } else {
            1
        }
    }
}

fn main() {
    let mut t = TestRunner::new();

    t.section("Part A — Construction");
    let fresh = NotFound::new("x");
    t.check("message formatted at construction", fresh.message() == "symbol 'x' not found");
    t.check("fresh error has empty file", fresh.file().is_empty());
    t.check("fresh error has line 0", fresh.line() == 0);
    t.check("display without site is bare message", fresh.to_string() == "symbol 'x' not found");

    t.section("Part B — Raise sites");
    let err = lookup("x").unwrap_err();
    t.check("raise! stamps this binary's file", err.file() == file!());
    t.check("raise! stamps a 1-based line", err.line() > 0);
    t.check("raise! preserves the message", err.message() == fresh.message());
    let arg_err = call("connect", 9).unwrap_err();
    t.check("ensure! raises on violated condition", arg_err.message() == "bad argument #9 to 'connect'");
    t.check("ensure! stamps context", arg_err.line() > 0 && !arg_err.file().is_empty());

    t.section("Part C — Polymorphic catch");
    let caught: Box<dyn SiteError> = call("connect", 2).unwrap_err();
    t.check("catch by capability reads message", caught.message() == "symbol 'connect' not found");
    t.check("reporter format carries site", caught.to_string().contains(" (at "));
    t.check(
        "reporter format carries file and line",
        caught.to_string().contains(&format!("{}:{}", caught.file(), caught.line())),
    );

    t.section("Part D — Copy semantics");
    let original = NotFound::new("x");
    let first = stamp(&original, "first.rs", 10);
    let second = stamp(&original, "second.rs", 20);
    t.check("original stays unstamped", original.line() == 0 && original.file().is_empty());
    t.check("first copy keeps its own site", first.file() == "first.rs" && first.line() == 10);
    t.check("second copy keeps its own site", second.file() == "second.rs" && second.line() == 20);
    let long = "n".repeat(FILE_CAPACITY + 100);
    let truncated = stamp(&original, &long, 1);
    t.check("overlong file name truncates silently", truncated.file().len() == FILE_CAPACITY - 1);

    std::process::exit(t.summary());
}

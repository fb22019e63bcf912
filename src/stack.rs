//! Call-stack capture and symbolic frames.
//!
//! A [`Stack`] is a fixed snapshot of instruction pointers taken once, when an
//! [`Error`](crate::Error) is constructed. Nothing is resolved at capture
//! time: each [`Frame`] looks up its function, file and line through the
//! `backtrace` crate only when it is rendered or queried.
//!
//! # Examples
//!
//! ```
//! use error_trace::{render, Frame};
//!
//! // A zero handle never resolves and degrades to the sentinel text.
//! let frame = Frame::from_ip(0);
//! assert_eq!(render(&frame, "%v").unwrap(), "unknown:0");
//! assert_eq!(render(&frame, "%+v").unwrap(), "unknown\n\tunknown:0");
//! ```

use core::ffi::c_void;
use core::fmt;
use core::ops::Deref;
use std::path::PathBuf;

use smallvec::SmallVec;

use crate::format::{Render, Spec, Verb};

/// Maximum number of handles recorded per capture.
pub const MAX_DEPTH: usize = 32;

/// Frames dropped above the unwinder: the capture routine, the internal
/// builder and the public constructor.
pub const SKIP: usize = 3;

/// Text used for anything that cannot be resolved.
pub const UNKNOWN: &str = "unknown";

// Bound on the frames walked before the capture routine is located.
const SCAN_LIMIT: usize = 128;

// Demangled suffix of `Stack::capture`.
const CAPTURE_SYMBOL: &str = "stack::Stack::capture";

/// One call site, identified by the raw instruction pointer of a stack frame.
///
/// The pointer is the return address, so resolution looks up `ip - 1` to land
/// on the call instruction itself.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Frame(usize);

struct Symbol {
    function: String,
    file: Option<PathBuf>,
    line: Option<u32>,
}

impl Frame {
    /// Wraps a raw instruction pointer.
    #[inline]
    pub const fn from_ip(ip: usize) -> Self {
        Self(ip)
    }

    /// Returns the raw instruction pointer this frame was built from.
    #[inline]
    pub const fn ip(&self) -> usize {
        self.0
    }

    #[inline]
    fn pc(&self) -> usize {
        self.0.wrapping_sub(1)
    }

    fn symbolize(&self) -> Option<Symbol> {
        if self.0 == 0 {
            return None;
        }

        let mut found = None;
        backtrace::resolve(self.pc() as *mut c_void, |symbol| {
            if found.is_some() {
                return;
            }
            if let Some(name) = symbol.name() {
                found = Some(Symbol {
                    function: format!("{:#}", name),
                    file: symbol.filename().map(|path| path.to_path_buf()),
                    line: symbol.lineno(),
                });
            }
        });
        found
    }

    /// Fully qualified name of the function containing this frame.
    pub fn function(&self) -> String {
        self.symbolize().map(|s| s.function).unwrap_or_else(|| UNKNOWN.into())
    }

    /// Full path of the source file containing this frame.
    pub fn file(&self) -> String {
        self.symbolize()
            .and_then(|s| s.file)
            .map(|path| path.display().to_string())
            .unwrap_or_else(|| UNKNOWN.into())
    }

    /// Source line of this frame, `0` when unknown.
    pub fn line(&self) -> u32 {
        self.symbolize().and_then(|s| s.line).unwrap_or(0)
    }

    /// Function name with its path and crate qualifiers removed.
    pub fn name(&self) -> String {
        funcname(&self.function()).into()
    }

    /// Single-line form used for structured logs: `<function> <file>:<line>`,
    /// or the sentinel alone when the frame does not resolve.
    pub fn marshal_text(&self) -> String {
        match self.symbolize() {
            None => UNKNOWN.into(),
            Some(symbol) => format!(
                "{} {}:{}",
                symbol.function,
                FileText(Some(&symbol)),
                symbol.line.unwrap_or(0)
            ),
        }
    }
}

struct FileText<'a>(Option<&'a Symbol>);

impl fmt::Display for FileText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.and_then(|s| s.file.as_ref()) {
            Some(path) => write!(f, "{}", path.display()),
            None => f.write_str(UNKNOWN),
        }
    }
}

fn write_frame(f: &mut fmt::Formatter<'_>, symbol: Option<&Symbol>, spec: Spec) -> fmt::Result {
    let function = symbol.map_or(UNKNOWN, |s| s.function.as_str());
    match spec.verb() {
        Verb::S if spec.is_plus() => {
            f.write_str(function)?;
            f.write_str("\n\t")?;
            write!(f, "{}", FileText(symbol))
        },
        Verb::S => match symbol.and_then(|s| s.file.as_ref()) {
            Some(path) => match path.file_name() {
                Some(base) => f.write_str(&base.to_string_lossy()),
                None => write!(f, "{}", path.display()),
            },
            None => f.write_str(UNKNOWN),
        },
        Verb::D => write!(f, "{}", symbol.and_then(|s| s.line).unwrap_or(0)),
        Verb::N => f.write_str(funcname(function)),
        Verb::V => {
            let file = if spec.is_plus() { Spec::plus(Verb::S) } else { Spec::new(Verb::S) };
            write_frame(f, symbol, file)?;
            f.write_str(":")?;
            write_frame(f, symbol, Spec::new(Verb::D))
        },
        Verb::Q => Ok(()),
    }
}

impl Render for Frame {
    fn render(&self, f: &mut fmt::Formatter<'_>, spec: Spec) -> fmt::Result {
        write_frame(f, self.symbolize().as_ref(), spec)
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let spec = if f.alternate() { Spec::plus(Verb::V) } else { Spec::new(Verb::V) };
        self.render(f, spec)
    }
}

impl fmt::Debug for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = self.symbolize();
        f.debug_struct("Frame")
            .field("ip", &format_args!("{:#x}", self.0))
            .field("function", &symbol.as_ref().map_or(UNKNOWN, |s| s.function.as_str()))
            .field("file", &format_args!("{}", FileText(symbol.as_ref())))
            .field("line", &symbol.as_ref().and_then(|s| s.line).unwrap_or(0))
            .finish()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Frame {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.marshal_text())
    }
}

/// Strips the path and package qualifiers from a function name.
///
/// Everything up to the last `/` goes first. A Rust `::` path then loses its
/// crate segment; any other name loses everything up to its first `.`.
///
/// ```
/// use error_trace::funcname;
///
/// assert_eq!(funcname("example.com/pkg/sub.Type.Method"), "Type.Method");
/// assert_eq!(funcname("my_crate::store::lookup"), "store::lookup");
/// assert_eq!(funcname("unknown"), "unknown");
/// ```
pub fn funcname(name: &str) -> &str {
    let name = match name.rfind('/') {
        Some(i) => &name[i + 1..],
        None => name,
    };
    if name.starts_with('<') {
        return name;
    }
    if let Some(i) = name.find("::") {
        return &name[i + 2..];
    }
    match name.find('.') {
        Some(i) => &name[i + 1..],
        None => name,
    }
}

/// Index of the first handle whose symbol (or an inlined symbol at the same
/// address) ends with `suffix`.
fn position_by_name(ips: &[usize], suffix: &str) -> Option<usize> {
    ips.iter().position(|&ip| {
        let mut hit = false;
        backtrace::resolve(ip.wrapping_sub(1) as *mut c_void, |symbol| {
            if let Some(name) = symbol.name() {
                hit = hit || format!("{:#}", name).ends_with(suffix);
            }
        });
        hit
    })
}

/// Instruction pointers captured when an error was built, innermost first.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Stack {
    pcs: Box<[usize]>,
}

impl Stack {
    /// Walks the current call stack.
    ///
    /// Only meaningful when called from the error builder: the first [`SKIP`]
    /// frames starting at this function are dropped so the capture begins at
    /// the caller of the public constructor.
    ///
    /// This function's own frame is found by symbol address. When the
    /// unwinder reports a different address (import thunks, some incremental
    /// links) the walked frames are searched by symbol name instead. If both
    /// fail, nothing is skipped and the capture starts inside the unwinder.
    #[inline(never)]
    pub(crate) fn capture() -> Self {
        let marker = Self::capture as *const () as usize;
        let mut scratch: SmallVec<[usize; 64]> = SmallVec::new();
        let mut start = None;

        backtrace::trace(|frame| {
            if start.is_none() && frame.symbol_address() as usize == marker {
                start = Some(scratch.len());
            }
            scratch.push(frame.ip() as usize);
            match start {
                Some(at) => scratch.len() < at + SKIP + MAX_DEPTH,
                None => scratch.len() < SCAN_LIMIT,
            }
        });

        let start = start.or_else(|| position_by_name(&scratch, CAPTURE_SYMBOL));
        let begin = start.map_or(0, |at| at + SKIP).min(scratch.len());
        let end = (begin + MAX_DEPTH).min(scratch.len());
        Self { pcs: scratch[begin..end].into() }
    }

    /// Number of captured frames.
    #[inline]
    pub fn len(&self) -> usize {
        self.pcs.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pcs.is_empty()
    }

    /// Raw instruction pointers, innermost first.
    #[inline]
    pub fn handles(&self) -> &[usize] {
        &self.pcs
    }

    /// Converts the capture into frames.
    pub fn trace(&self) -> StackTrace {
        self.pcs.iter().copied().map(Frame::from_ip).collect()
    }
}

impl Render for Stack {
    fn render(&self, f: &mut fmt::Formatter<'_>, spec: Spec) -> fmt::Result {
        self.trace().render(f, spec)
    }
}

impl fmt::Display for Stack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.trace(), f)
    }
}

impl fmt::Debug for Stack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.trace(), f)
    }
}

/// An ordered sequence of frames, innermost first.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct StackTrace(Vec<Frame>);

impl StackTrace {
    #[inline]
    pub fn frames(&self) -> &[Frame] {
        &self.0
    }

    #[inline]
    pub fn into_frames(self) -> Vec<Frame> {
        self.0
    }

    fn write_list(&self, f: &mut fmt::Formatter<'_>, spec: Spec) -> fmt::Result {
        f.write_str("[")?;
        for (i, frame) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            frame.render(f, spec)?;
        }
        f.write_str("]")
    }
}

impl Deref for StackTrace {
    type Target = [Frame];

    fn deref(&self) -> &[Frame] {
        &self.0
    }
}

impl From<Vec<Frame>> for StackTrace {
    fn from(frames: Vec<Frame>) -> Self {
        Self(frames)
    }
}

impl FromIterator<Frame> for StackTrace {
    fn from_iter<I: IntoIterator<Item = Frame>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a StackTrace {
    type Item = &'a Frame;
    type IntoIter = core::slice::Iter<'a, Frame>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl IntoIterator for StackTrace {
    type Item = Frame;
    type IntoIter = std::vec::IntoIter<Frame>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl Render for StackTrace {
    fn render(&self, f: &mut fmt::Formatter<'_>, spec: Spec) -> fmt::Result {
        match spec.verb() {
            Verb::V if spec.is_plus() => {
                for frame in &self.0 {
                    f.write_str("\n")?;
                    frame.render(f, spec)?;
                }
                Ok(())
            },
            Verb::V | Verb::S => self.write_list(f, spec),
            _ => Ok(()),
        }
    }
}

impl fmt::Display for StackTrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let spec = if f.alternate() { Spec::plus(Verb::V) } else { Spec::new(Verb::V) };
        self.render(f, spec)
    }
}

impl fmt::Debug for StackTrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.iter()).finish()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for StackTrace {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.0.iter())
    }
}

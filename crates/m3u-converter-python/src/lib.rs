//! Python bindings for the M3U converter logger via PyO3
//!
//! The Enigma2 plugin constructs `ProcessLogger(...)` from Python. Every
//! construction returns a handle to the same process-wide logger. Logging
//! calls never raise.

use pyo3::prelude::*;
use pyo3::types::PyTuple;
use std::path::PathBuf;
use std::sync::Arc;

use m3u_converter_core::config::LoggerConfig;
use m3u_converter_core::logging::{
    default_log_path as core_default_log_path, ErrorReport, ProcessLogger as CoreProcessLogger,
};

// ============================================================================
// Message helpers
// ============================================================================

/// `msg % args` when positional arguments are given, `str(msg)` otherwise
///
/// A bad format string must not raise, so the arguments are appended instead.
fn render(msg: &Bound<'_, PyAny>, args: &Bound<'_, PyTuple>) -> String {
    let text = msg
        .str()
        .map(|s| s.to_string())
        .unwrap_or_else(|_| "<unprintable message>".to_string());

    if args.is_empty() {
        return text;
    }

    match msg.rem(args).and_then(|formatted| formatted.str()) {
        Ok(formatted) => formatted.to_string(),
        Err(_) => match args.repr() {
            Ok(repr) => format!("{} {}", text, repr),
            Err(_) => text,
        },
    }
}

/// The exception currently being handled, as reported by `sys.exc_info()`
fn active_exception(py: Python<'_>) -> PyResult<Option<ErrorReport>> {
    let info = py.import("sys")?.call_method0("exc_info")?;
    let (kind, value, tb): (Bound<'_, PyAny>, Bound<'_, PyAny>, Bound<'_, PyAny>) =
        info.extract()?;
    if value.is_none() {
        return Ok(None);
    }

    let type_name: String = kind.getattr("__name__")?.extract()?;
    let description = value.str()?.to_string();
    let chunks: Vec<String> = py
        .import("traceback")?
        .call_method1("format_exception", (kind, value, tb))?
        .extract()?;
    let trace = chunks
        .iter()
        .flat_map(|chunk| chunk.lines())
        .filter(|line| !line.trim().is_empty())
        .map(str::to_string)
        .collect();

    Ok(Some(ErrorReport::new(type_name, description, trace)))
}

fn no_exception() -> ErrorReport {
    ErrorReport::new("NoneType", "None", Vec::new())
}

// ============================================================================
// ProcessLogger
// ============================================================================

/// Handle to the process-wide logger
#[pyclass(name = "ProcessLogger", frozen)]
pub struct ProcessLogger {
    inner: Arc<CoreProcessLogger>,
}

#[pymethods]
impl ProcessLogger {
    /// Arguments only take effect on the first construction in the process
    #[new]
    #[pyo3(signature = (log_file=None, clear_on_start=true))]
    pub fn new(log_file: Option<PathBuf>, clear_on_start: bool) -> Self {
        Self {
            inner: CoreProcessLogger::instance(log_file, clear_on_start),
        }
    }

    /// Shared logger configured from the user YAML file and `M3U_CONVERTER_*`
    /// variables; an unreadable file falls back to the variables alone
    #[staticmethod]
    pub fn from_env() -> Self {
        let config = LoggerConfig::load().unwrap_or_else(|_| LoggerConfig::from_env());
        Self {
            inner: CoreProcessLogger::from_config(config),
        }
    }

    #[getter]
    pub fn log_file(&self) -> Option<String> {
        self.inner
            .log_file()
            .map(|p| p.to_string_lossy().to_string())
    }

    pub fn failure_count(&self) -> u64 {
        self.inner.failure_count()
    }

    pub fn log(&self, level: &Bound<'_, PyAny>, message: &Bound<'_, PyAny>) {
        let py = level.py();
        let no_args = PyTuple::empty(py);
        self.inner.log(&render(level, &no_args), &render(message, &no_args));
    }

    #[pyo3(signature = (msg, *args))]
    pub fn debug(&self, msg: &Bound<'_, PyAny>, args: &Bound<'_, PyTuple>) {
        self.inner.debug(&render(msg, args));
    }

    #[pyo3(signature = (msg, *args))]
    pub fn info(&self, msg: &Bound<'_, PyAny>, args: &Bound<'_, PyTuple>) {
        self.inner.info(&render(msg, args));
    }

    #[pyo3(signature = (msg, *args))]
    pub fn warning(&self, msg: &Bound<'_, PyAny>, args: &Bound<'_, PyTuple>) {
        self.inner.warning(&render(msg, args));
    }

    #[pyo3(signature = (msg, *args))]
    pub fn error(&self, msg: &Bound<'_, PyAny>, args: &Bound<'_, PyTuple>) {
        self.inner.error(&render(msg, args));
    }

    #[pyo3(signature = (msg, *args))]
    pub fn critical(&self, msg: &Bound<'_, PyAny>, args: &Bound<'_, PyTuple>) {
        self.inner.critical(&render(msg, args));
    }

    /// Call from an `except` block; the active exception and its traceback
    /// are appended to the message
    #[pyo3(signature = (msg, *args))]
    pub fn exception(&self, py: Python<'_>, msg: &Bound<'_, PyAny>, args: &Bound<'_, PyTuple>) {
        let report = active_exception(py)
            .ok()
            .flatten()
            .unwrap_or_else(no_exception);
        self.inner.exception(&render(msg, args), &report);
    }

    fn __repr__(&self) -> String {
        match self.log_file() {
            Some(path) => format!("ProcessLogger(log_file='{}')", path),
            None => "ProcessLogger(log_file=None)".to_string(),
        }
    }
}

// ============================================================================
// Module Functions
// ============================================================================

/// Conventional log file location under the temp directory
#[pyfunction]
pub fn default_log_path() -> String {
    core_default_log_path().to_string_lossy().to_string()
}

// ============================================================================
// Module Definition
// ============================================================================

#[pymodule]
fn m3u_converter(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<ProcessLogger>()?;
    m.add_function(wrap_pyfunction!(default_log_path, m)?)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pyo3::types::{PyDict, PyString};

    #[pyfunction]
    fn describe_active(py: Python<'_>) -> Option<String> {
        active_exception(py).ok().flatten().map(|r| r.to_string())
    }

    #[test]
    fn test_render_without_args_keeps_text() {
        Python::with_gil(|py| {
            let msg = PyString::new(py, "100% done");
            assert_eq!(render(msg.as_any(), &PyTuple::empty(py)), "100% done");
        });
    }

    #[test]
    fn test_render_interpolates_args() {
        Python::with_gil(|py| {
            let msg = PyString::new(py, "hello %s, %d channels");
            let world = PyString::new(py, "world").into_any();
            let count = 42i64.into_pyobject(py).unwrap().into_any();
            let args = PyTuple::new(py, [world, count]).unwrap();
            assert_eq!(render(msg.as_any(), &args), "hello world, 42 channels");
        });
    }

    #[test]
    fn test_render_bad_format_appends_args() {
        Python::with_gil(|py| {
            let msg = PyString::new(py, "no placeholders");
            let args = PyTuple::new(py, ["extra"]).unwrap();
            assert_eq!(render(msg.as_any(), &args), "no placeholders ('extra',)");
        });
    }

    #[test]
    fn test_render_non_string_message() {
        Python::with_gil(|py| {
            let msg = 42i64.into_pyobject(py).unwrap();
            assert_eq!(render(msg.as_any(), &PyTuple::empty(py)), "42");
        });
    }

    #[test]
    fn test_no_active_exception() {
        Python::with_gil(|py| {
            assert!(active_exception(py).unwrap().is_none());
        });
        let report = no_exception();
        assert_eq!(report.to_string(), "NoneType: None");
        assert!(!report.has_trace());
    }

    #[test]
    fn test_active_exception_inside_except() {
        Python::with_gil(|py| {
            let locals = PyDict::new(py);
            locals
                .set_item("describe_active", wrap_pyfunction!(describe_active, py).unwrap())
                .unwrap();
            py.run(
                c"try:\n    1 / 0\nexcept ZeroDivisionError:\n    result = describe_active()\n",
                None,
                Some(&locals),
            )
            .unwrap();

            let result: String = locals.get_item("result").unwrap().unwrap().extract().unwrap();
            assert!(result.starts_with("ZeroDivisionError: division by zero\n"));
            assert!(result.contains("Traceback (most recent call last):"));
        });
    }
}

// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::config::consts::{STATUS_SUCCESS, STATUS_UNSET};
use crate::render::ir::{Binding, FunctionDef, ReturnDecl};
use crate::render::targets::{generated_notice, Target};
use crate::runtime::platform::{PlatformFamily, FALLBACK_EXTENSION};

/// Emits a Python 3 module that loads the bridge with `ctypes`.
///
/// Every name the module defines for its own use starts with an underscore so
/// generated parameters can never shadow it.
pub struct PythonTarget;

impl Target for PythonTarget {
    fn name(&self) -> &'static str {
        "python"
    }

    fn file_extension(&self) -> &'static str {
        "py"
    }

    fn format(&self, binding: &Binding) -> String {
        let mut out = String::new();

        out.push_str(&format!("# {}\n\n", generated_notice(binding)));
        out.push_str("import ctypes\nimport json\nimport os\nimport sys\nimport warnings\n\n");
        out.push_str(&format!("SDK_VERSION = {}\n", py_str(&binding.version)));
        out.push_str(&format!("_LIBRARY_STEM = {}\n", py_str(&binding.library_stem)));
        out.push_str(&format!("_STATUS_SUCCESS = {}\n", STATUS_SUCCESS));
        out.push_str(&format!("_STATUS_UNSET = {}\n\n", STATUS_UNSET));
        out.push_str(&render_platform_table());
        out.push_str(EXCEPTIONS);
        out.push_str(&LOADER.replace("{fallback}", &py_str(FALLBACK_EXTENSION)));

        out.push_str("# Every export returns a pointer; the ctypes default of int would truncate it.\n");
        out.push_str("try:\n");
        out.push_str(&render_declaration(&binding.diagnostic));
        for decl in &binding.declarations {
            out.push_str(&render_declaration(decl));
        }
        out.push_str(MISSING_EXPORT);

        out.push_str(HELPERS);
        out.push_str(CLIENT_HEAD);
        for function in &binding.functions {
            out.push('\n');
            out.push_str(&render_method(function));
        }

        out
    }
}

/// Python string literal for `value`.
fn py_str(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('\'');
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => out.push_str(&format!("\\u{:04x}", c as u32)),
            c => out.push(c),
        }
    }
    out.push('\'');
    out
}

fn render_platform_table() -> String {
    let mut out = String::from("_PLATFORM_EXTENSIONS = (\n");
    for (family, prefixes) in PlatformFamily::PREFIXES {
        for prefix in prefixes.iter() {
            out.push_str(&format!(
                "    ({}, {}),\n",
                py_str(prefix),
                py_str(family.extension())
            ));
        }
    }
    out.push_str(")\n\n\n");
    out
}

fn render_declaration(decl: &ReturnDecl) -> String {
    let mut args = vec!["ctypes.c_char_p"; decl.buffer_count()];
    if decl.authenticated {
        args.push("ctypes.POINTER(ctypes.c_int)");
    }
    format!(
        "    _bridge.{export}.restype = ctypes.POINTER(ctypes.c_char)\n    _bridge.{export}.argtypes = [{args}]\n",
        export = decl.export,
        args = args.join(", ")
    )
}

fn render_method(function: &FunctionDef) -> String {
    let params: String = function
        .params
        .iter()
        .map(|p| format!(", {}", p.name))
        .collect();

    let mut out = format!("    def {}(self{}):\n", function.name, params);
    out.push_str(&format!("        \"\"\"Calls the {} export.\"\"\"\n", function.export));

    if let Some(step) = &function.serialize {
        out.push_str(&format!("        {} = _serialize({})\n", step.local, step.param));
    }
    for arg in &function.call_args {
        out.push_str(&format!("        {} = _encode({})\n", arg.buffer, arg.source));
    }

    let buffers: String = function
        .call_args
        .iter()
        .map(|a| format!(", {}", a.buffer))
        .collect();
    out.push_str(&format!(
        "        return _call(_bridge.{}, self._key{})\n",
        function.export, buffers
    ));
    out
}

const EXCEPTIONS: &str = r#"class BridgeException(Exception):
    """Error reported by the bridge library or raised while marshalling a call."""

    def __init__(self, message, status_code=None):
        super().__init__(message)
        self.status_code = status_code


class BridgeValidationError(BridgeException):
    """Invalid argument detected before calling the library."""


class BridgeSerializationError(BridgeException):
    """An argument could not be converted for the library."""


class BridgeProtocolError(BridgeException):
    """The library returned a response that does not follow the envelope format."""


class BridgeLoadError(BridgeException):
    """The library could not be loaded."""


"#;

const LOADER: &str = r#"def _library_filename(platform):
    for prefix, extension in _PLATFORM_EXTENSIONS:
        if platform.lower().startswith(prefix):
            return _LIBRARY_STEM + '.' + extension
    warnings.warn('Unknown platform %r, assuming .%s libraries' % (platform, {fallback}))
    return _LIBRARY_STEM + '.' + {fallback}


_LIBRARY_PATH = os.path.join(os.path.dirname(os.path.abspath(__file__)), _library_filename(sys.platform))

try:
    _bridge = ctypes.cdll.LoadLibrary(_LIBRARY_PATH)
except OSError as e:
    raise BridgeLoadError('Unable to load %s: %s' % (_LIBRARY_PATH, e))

"#;

// A loaded library lacking an export fails the same way as a library that
// cannot be loaded at all.
const MISSING_EXPORT: &str = r#"except AttributeError as e:
    raise BridgeLoadError('Missing export in %s: %s' % (_LIBRARY_PATH, e))


"#;

const HELPERS: &str = r#"def _encode(value):
    encoded = str(value).encode('utf-8')
    if b'\0' in encoded:
        raise BridgeSerializationError('value contains a NUL byte at position %d' % encoded.index(b'\0'))
    return encoded


def _serialize(value):
    try:
        return json.dumps(value)
    except (TypeError, ValueError) as e:
        raise BridgeSerializationError('unable to serialize payload: %s' % e)


def _decode(pointer):
    if not pointer:
        return None
    raw = ctypes.cast(pointer, ctypes.c_char_p).value
    if not raw:
        return None
    try:
        return raw.decode('utf-8')
    except UnicodeDecodeError as e:
        raise BridgeProtocolError('response is not valid UTF-8: %s' % e)


def _handle_return(status_code, pointer):
    text = _decode(pointer)

    if status_code == _STATUS_SUCCESS:
        if text is None:
            return None
        try:
            envelope = json.loads(text)
        except ValueError as e:
            raise BridgeProtocolError('success response is not valid JSON: %s' % e)
        if not isinstance(envelope, dict) or 'data' not in envelope:
            raise BridgeProtocolError("success response has no 'data' field")
        return envelope['data']

    message = None
    if text is not None:
        try:
            envelope = json.loads(text)
        except ValueError:
            envelope = None
        if isinstance(envelope, dict) and isinstance(envelope.get('message'), str):
            message = envelope['message']
    if message is None:
        message = 'Unknown error (status %d).' % status_code
    raise BridgeException(message, status_code)


def _call(export, key, *buffers):
    status = ctypes.c_int(_STATUS_UNSET)
    pointer = export(key, *buffers, ctypes.byref(status))
    return _handle_return(status.value, pointer)


def test_bridge(s):
    """Check that data flows across the bridge. Should return "Hello <s>"."""
    text = _decode(_bridge.TestBridge(_encode(s)))
    if text is None:
        raise BridgeProtocolError('TestBridge returned no buffer')
    return text


def get_sdk_version():
    """Returns the release version of the SDK."""
    return SDK_VERSION


"#;

const CLIENT_HEAD: &str = r#"class Client(object):
    """API client bound to the loaded bridge."""

    def __init__(self, key):
        if ':' not in key:
            raise BridgeValidationError('Invalid API key.')
        self._key = _encode(key)

    @staticmethod
    def get_sdk_version():
        """Returns the release version of the SDK."""
        return SDK_VERSION
"#;

use serde::{Deserialize, Serialize};

/// Documentation unit for one source file.
///
/// Owns its classes and functions outright; children never point back at
/// parents. Declaration order follows source order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModuleDoc {
    /// Path relative to the analyzed root, forward slashes on every platform
    pub path: String,
    /// Dotted module name derived from the path (`pkg/util.py` -> `pkg.util`)
    pub name: String,
    pub description: Option<Description>,
    /// Imported dotted names in source order (`os`, `typing.List`)
    pub imports: Vec<String>,
    /// Module-level variable names in source order
    pub variables: Vec<String>,
    pub classes: Vec<ClassDoc>,
    pub functions: Vec<FunctionDoc>,
    /// Full source text, kept for slicing highlighted snippets
    #[serde(skip)]
    pub source: String,
}

impl ModuleDoc {
    pub fn new(path: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            name: name.into(),
            description: None,
            imports: Vec::new(),
            variables: Vec::new(),
            classes: Vec::new(),
            functions: Vec::new(),
            source: String::new(),
        }
    }

    /// Total number of documented declarations, the module itself excluded
    pub fn symbol_count(&self) -> usize {
        self.functions.len() + self.classes.iter().map(ClassDoc::symbol_count).sum::<usize>()
    }

    /// Page identifier derived from the relative path. Letters, digits and
    /// `_` pass through, `/` becomes `-`, and any other character is spelled
    /// as `.` plus two hex digits per UTF-8 byte, so distinct paths
    /// (`a/b.py`, `a-b.py`, `a.b.py`) never share an output page
    pub fn slug(&self) -> String {
        let stem = self.path.strip_suffix(".py").unwrap_or(&self.path);
        let mut slug = String::with_capacity(stem.len());
        for c in stem.chars() {
            if c.is_ascii_alphanumeric() || c == '_' {
                slug.push(c);
            } else if c == '/' {
                slug.push('-');
            } else {
                let mut utf8 = [0u8; 4];
                for byte in c.encode_utf8(&mut utf8).bytes() {
                    slug.push_str(&format!(".{:02x}", byte));
                }
            }
        }
        slug
    }

    /// File name of this module's generated page
    pub fn page(&self) -> String {
        format!("{}.html", self.slug())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassDoc {
    pub name: String,
    /// Dotted name within the module (`Outer.Inner`)
    pub qualname: String,
    pub bases: Vec<String>,
    pub decorators: Vec<String>,
    /// Class-level variable names in source order
    pub attributes: Vec<String>,
    pub description: Option<Description>,
    pub methods: Vec<FunctionDoc>,
    /// Nested class definitions (a tree, never a graph)
    pub classes: Vec<ClassDoc>,
    pub span: LineSpan,
}

impl ClassDoc {
    pub fn new(name: impl Into<String>, qualname: impl Into<String>, span: LineSpan) -> Self {
        Self {
            name: name.into(),
            qualname: qualname.into(),
            bases: Vec::new(),
            decorators: Vec::new(),
            attributes: Vec::new(),
            description: None,
            methods: Vec::new(),
            classes: Vec::new(),
            span,
        }
    }

    /// The class itself plus everything declared inside it
    pub fn symbol_count(&self) -> usize {
        1 + self.methods.len() + self.classes.iter().map(ClassDoc::symbol_count).sum::<usize>()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FunctionDoc {
    pub name: String,
    /// Dotted name within the module (`Circle.area` for methods)
    pub qualname: String,
    pub params: Vec<Param>,
    /// Return annotation as written in source, never evaluated
    pub returns: Option<String>,
    pub decorators: Vec<String>,
    #[serde(rename = "async")]
    pub is_async: bool,
    /// True when declared in a class body
    pub is_method: bool,
    pub description: Option<Description>,
    pub span: LineSpan,
    /// Cyclomatic complexity (decision points + 1)
    pub complexity: u32,
    /// Body-shape cues consumed by description inference only
    #[serde(skip)]
    pub body: BodyHint,
}

impl FunctionDoc {
    pub fn new(name: impl Into<String>, qualname: impl Into<String>, span: LineSpan) -> Self {
        Self {
            name: name.into(),
            qualname: qualname.into(),
            params: Vec::new(),
            returns: None,
            decorators: Vec::new(),
            is_async: false,
            is_method: false,
            description: None,
            span,
            complexity: 1,
            body: BodyHint::default(),
        }
    }

    /// Parameter names without annotations, for templated descriptions
    pub fn param_names(&self) -> Vec<&str> {
        self.params.iter().map(|p| p.name.as_str()).collect()
    }
}

/// One parameter of a function signature. `self`/`cls` receivers are never
/// recorded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Param {
    pub name: String,
    /// Annotation as written in source (`float`, `List[int]`), opaque text
    #[serde(rename = "type")]
    pub annotation: Option<String>,
    pub default: Option<String>,
}

impl Param {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            annotation: None,
            default: None,
        }
    }

    pub fn with_annotation(mut self, annotation: impl Into<String>) -> Self {
        self.annotation = Some(annotation.into());
        self
    }

    pub fn with_default(mut self, default: impl Into<String>) -> Self {
        self.default = Some(default.into());
        self
    }
}

/// A declaration's one-line or multi-line description and where it came from.
/// Docstrings render as markdown; inferred text renders as an annotation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Description {
    pub text: String,
    pub origin: DescriptionOrigin,
}

impl Description {
    pub fn docstring(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            origin: DescriptionOrigin::Docstring,
        }
    }

    pub fn inferred(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            origin: DescriptionOrigin::Inferred,
        }
    }

    pub fn is_inferred(&self) -> bool {
        self.origin == DescriptionOrigin::Inferred
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DescriptionOrigin {
    Docstring,
    Inferred,
}

/// 1-based inclusive source line range of a declaration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineSpan {
    pub start: usize,
    pub end: usize,
}

impl LineSpan {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }
}

/// Syntactic cues about a function body, captured at extraction time so
/// inference stays a pure function of the declaration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BodyHint {
    /// Statement count, docstring excluded
    pub statements: usize,
    /// Shape of the return expression when the body is a single return
    pub return_expr: Option<ReturnExpr>,
    /// Names called in the body, first occurrence order, deduplicated
    pub calls: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReturnExpr {
    /// `return left <op> right` with the operator token as written
    Binary {
        left: String,
        op: String,
        right: String,
    },
    Name(String),
    Call(String),
    Other,
}

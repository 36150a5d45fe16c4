use std::{
    fmt::{self, Display, Formatter},
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use log::{debug, trace};
use located_error::prelude::*;

use crate::{Pedigree, PedigreeBuilder};

mod error;
pub use error::LoaderError;

/// Field separator of pedigree definition files.
pub const FIELD_SEPARATOR: char = ',';
/// Everything following this character within a line is ignored.
pub const COMMENT_CHAR: char = '#';

/// Columns of a pedigree definition file. Columns are located using the header line, and may thus
/// come in any order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {Name, Mother, Father, Trait}

impl Column {
    const ALL: [Column; 4] = [Column::Name, Column::Mother, Column::Father, Column::Trait];

    fn label(&self) -> &'static str {
        match self {
            Self::Name   => "name",
            Self::Mother => "mother",
            Self::Father => "father",
            Self::Trait  => "trait",
        }
    }
}

impl Display for Column {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Field index of each `Column`, in `Column::ALL` order.
struct Header {
    indices: [usize; 4],
    len    : usize,
}

impl Header {
    fn parse(fields: &[&str]) -> Result<Self, LoaderError> {
        let mut indices = [None; 4];
        for (i, field) in fields.iter().enumerate() {
            if let Some(c) = Column::ALL.iter().position(|col| col.label().eq_ignore_ascii_case(field)) {
                if indices[c].replace(i).is_some() {
                    return Err(LoaderError::DuplicateColumn(Column::ALL[c]))
                }
            }
        }
        let mut resolved = [0; 4];
        for (c, index) in indices.into_iter().enumerate() {
            resolved[c] = index.ok_or(LoaderError::MissingColumn(Column::ALL[c]))?;
        }
        Ok(Self{indices: resolved, len: fields.len()})
    }

    fn get<'a>(&self, fields: &[&'a str], column: Column) -> Option<&'a str> {
        let field = fields[self.indices[column as usize]];
        (!field.is_empty()).then_some(field)
    }
}

/// Parse a trait observation field: `1` -> observed, `0` -> not observed, empty -> unknown.
fn parse_trait(value: Option<&str>, lineno: usize) -> Result<Option<bool>, LoaderError> {
    match value {
        None      => Ok(None),
        Some("1") => Ok(Some(true)),
        Some("0") => Ok(Some(false)),
        Some(other) => Err(LoaderError::InvalidTrait{value: other.to_string(), lineno}),
    }
}

/// Parse a pedigree definition file and return a validated `Pedigree`.
/// # Arguments:
/// - `path`: Path leading to the input pedigree definition file.
///
/// # Format
/// Comma-separated values, with a header line naming the `name`, `mother`, `father` and `trait`
/// columns. e.g.:
/// ```text
/// name,mother,father,trait
/// Harry,Lily,James,
/// James,,,1
/// Lily,,,0
/// ```
pub fn pedigree_parser(path: &Path) -> Result<Pedigree> {
    let loc_msg = || format!("While attempting to parse {}", path.display());
    debug!("Parsing pedigree definition file {}", path.display());
    let file = File::open(path).map_err(LoaderError::OpenFile).with_loc(loc_msg)?;
    read_pedigree(BufReader::new(file)).with_loc(loc_msg)
}

/// Strip comments and surrounding whitespace from a raw line.
fn strip_comment(line: &str) -> &str {
    line.split(COMMENT_CHAR).next().unwrap_or_default().trim()
}

fn split_fields(line: &str) -> Vec<&str> {
    line.split(FIELD_SEPARATOR).map(str::trim).collect()
}

/// Parse a pedigree definition from any buffered reader. See `pedigree_parser()`
pub fn read_pedigree<R: BufRead>(reader: R) -> Result<Pedigree> {
    let loc_msg = |ctxt: &str, i: usize| format!("{ctxt} while parsing line n°{i} in the pedigree definition file");

    // ---- Iterate over meaningful lines only, i.e. skip comments and empty lines.
    let mut records = reader.lines().enumerate().filter_map(|(i, line)| match line {
        Err(source) => Some(Err(LoaderError::IoError{source, lineno: i + 1})),
        Ok(line)    => {
            let content = strip_comment(&line);
            (!content.is_empty()).then(|| Ok((i + 1, content.to_string())))
        }
    });

    // ---- The first meaningful line is the header.
    let (lineno, header) = records.next()
        .transpose()?
        .ok_or(LoaderError::MissingHeader)
        .loc("While parsing the pedigree definition file")?;
    let header = Header::parse(&split_fields(&header)).with_loc(|| loc_msg("Invalid header", lineno))?;

    let mut builder = PedigreeBuilder::new();
    for record in records {
        let (lineno, line) = record?;
        let fields = split_fields(&line);
        if fields.len() != header.len {
            return Err(LoaderError::FieldCount{lineno, expected: header.len, got: fields.len()})
                .with_loc(|| loc_msg("Malformed record", lineno))
        }

        let name     = header.get(&fields, Column::Name).ok_or(LoaderError::EmptyName(lineno))?;
        let mother   = header.get(&fields, Column::Mother);
        let father   = header.get(&fields, Column::Father);
        let observed = parse_trait(header.get(&fields, Column::Trait), lineno)?;
        trace!("Line {lineno}: {name} - mother: {mother:?} - father: {father:?} - trait: {observed:?}");

        builder.add_record(name, mother, father, observed)
            .map_err(|source| LoaderError::AddPerson{source, lineno})
            .with_loc(|| loc_msg(&format!("Failed to add individual {name}"), lineno))?;
    }
    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};
    use crate::PedigreeError;

    fn read(contents: &str) -> Result<Pedigree> {
        read_pedigree(Cursor::new(contents))
    }

    fn root_loader_error(contents: &str) -> String {
        let err = read(contents).expect_err("Pedigree definition should be invalid");
        err.chain()
            .find_map(|cause| cause.downcast_ref::<LoaderError>())
            .map(|e| format!("{e:?}"))
            .unwrap_or_else(|| format!("{err:?}"))
    }

    #[test]
    fn parse_family() -> Result<()> {
        let pedigree = read("name,mother,father,trait\nHarry,Lily,James,\nJames,,,1\nLily,,,0\n")?;
        assert_eq!(pedigree.len(), 3);
        let harry = pedigree.get_by_name("Harry").expect("Harry should be defined");
        assert_eq!(harry.observed_trait(), None);
        assert_eq!(pedigree.get_by_name("James").and_then(|p| p.observed_trait()), Some(true));
        assert_eq!(pedigree.get_by_name("Lily").and_then(|p| p.observed_trait()), Some(false));
        Ok(())
    }

    #[test]
    fn columns_in_any_order_with_comments() -> Result<()> {
        let contents = "# A small family\n\ntrait,name,father,mother\n,Harry,James,Lily # the child\n1,James,,\n0,Lily,,\n";
        let pedigree = read(contents)?;
        let harry = pedigree.get_by_name("Harry").expect("Harry should be defined");
        let parents = harry.parents().expect("Harry has parents");
        assert_eq!(pedigree.get(parents.mother).map(|p| p.name()), Some("Lily"));
        assert_eq!(pedigree.get(parents.father).map(|p| p.name()), Some("James"));
        Ok(())
    }

    #[test]
    fn missing_column() {
        let err = root_loader_error("name,mother,trait\nHarry,,\n");
        assert!(err.contains("MissingColumn(Father)"), "{err}");
    }

    #[test]
    fn missing_header() {
        let err = root_loader_error("# nothing but comments\n\n");
        assert!(err.contains("MissingHeader"), "{err}");
    }

    #[test]
    fn invalid_trait() {
        let err = root_loader_error("name,mother,father,trait\nHarry,,,yes\n");
        assert!(err.contains("InvalidTrait"), "{err}");
    }

    #[test]
    fn field_count() {
        let err = root_loader_error("name,mother,father,trait\nHarry,,\n");
        assert!(err.contains("FieldCount { lineno: 2, expected: 4, got: 3 }"), "{err}");
    }

    #[test]
    fn half_parentage() {
        let err = root_loader_error("name,mother,father,trait\nHarry,Lily,,\nLily,,,\n");
        assert!(err.contains("HalfParentage"), "{err}");
    }

    #[test]
    fn unknown_parent() {
        let err = read("name,mother,father,trait\nHarry,Lily,James,\nJames,,,1\n")
            .expect_err("Lily is not defined");
        let cause = err.root_cause().downcast_ref::<PedigreeError>();
        assert_eq!(cause, Some(&PedigreeError::UnknownParent{person: "Harry".to_string(), parent: "Lily".to_string()}));
    }

    #[test]
    fn from_file() -> Result<()> {
        let tmpdir = tempfile::tempdir()?;
        let path = tmpdir.path().join("family.csv");
        let mut file = File::create(&path)?;
        writeln!(file, "name,mother,father,trait")?;
        writeln!(file, "Harry,,,1")?;
        drop(file);

        let pedigree = pedigree_parser(&path)?;
        assert_eq!(pedigree.names().collect::<Vec<_>>(), ["Harry"]);
        Ok(())
    }

    #[test]
    fn missing_file() {
        let err = pedigree_parser(Path::new("/non/existent/family.csv")).expect_err("File does not exist");
        assert!(err.chain().any(|cause| cause.downcast_ref::<LoaderError>().is_some()));
    }
}

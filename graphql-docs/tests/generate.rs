use graphql_docs::Configuration;
use graphql_docs::DocsError;
use graphql_docs::generate_docs;
use pretty_assertions::assert_eq;

const USER_SCHEMA: &str = r#"
type Query {
  "Look up a user by id"
  getUser(id: Int!): User!
}

type User {
  id: Int!
  "Display name"
  name: String
  friends: [User]
}
"#;

const EXPECTED_USER_DOCS: &str = r#"## Calling convention
### Endpoint
<code>POST http://host:port/graphql</code>
### Parameters
Build the request body following the GraphQL query syntax.

### Look up a user by id
#### Endpoint http://host:port/graphql
#### Method POST
#### Operation \<getUser\>
|Parameter|Type|Required|Description|
|----|----|-----|-----|
|query|String|Yes|GraphQL query document|
|variables|Object|Yes|Query variables|
|-id|Int|Yes||

#### Response type
|Field|Type|Required|Description|
|----|----|-----|-----|
|getUser|User|Yes|Look up a user by id|
|-id|Int|Yes||
|-name|String|No|Display name|
|-friends|Array\<User\>|No||

#### Example request
```json
{
    "query": "query search($id: Int!) {\n  data: getUser(id: $id) { id name }\n}",
    "variables": {
        "id": 1
    }
}
```
#### Example response
```json
{
    "data": {
        "id": 1,
        "name": "Display name"
    }
}
```
"#;

#[test]
fn documents_a_self_referencing_type() {
    let markdown = generate_docs(USER_SCHEMA, &Configuration::default()).unwrap();
    assert_eq!(markdown, EXPECTED_USER_DOCS);
}

#[test]
fn generation_is_repeatable() {
    let configuration = Configuration::default();
    assert_eq!(
        generate_docs(USER_SCHEMA, &configuration).unwrap(),
        generate_docs(USER_SCHEMA, &configuration).unwrap()
    );
}

const LIBRARY_SCHEMA: &str = r#"
type Query {
  "Books matching a filter"
  books(filter: BookFilter, first: Int): [Book!]!
  "Server health"
  healthy: Boolean!
  shelf: Shelf
}

"Publication status"
enum Status {
  "Available to borrow"
  AVAILABLE
  LENT
}

input BookFilter {
  status: Status
  authors: [String!]
}

type Book {
  title: String!
  status: Status!
  price: Float
  author: Author
}

type Author {
  name: String
  books: [Book]
}

type Shelf {
  label: Status
}
"#;

fn library_docs(configuration: &Configuration) -> String {
    generate_docs(LIBRARY_SCHEMA, configuration).unwrap()
}

#[test]
fn operations_appear_in_declaration_order() {
    let markdown = library_docs(&Configuration::default());
    let headings = markdown
        .lines()
        .filter(|line| line.starts_with("### ") && !line.starts_with("### Endpoint"))
        .filter(|line| *line != "### Parameters")
        .collect::<Vec<_>>();
    assert_eq!(
        headings,
        ["### Books matching a filter", "### Server health", "### shelf"]
    );
}

#[test]
fn argument_tables_expand_input_objects_and_enums() {
    let markdown = library_docs(&Configuration::default());
    assert!(markdown.contains(
        "|variables|Object|Yes|Query variables|\n\
         |-filter|BookFilter|No||\n\
         |--status|Status|No|AVAILABLE: AVAILABLE Available to borrow;LENT: LENT|\n\
         |--authors|Array\\<String\\>|No||\n\
         |-first|Int|No||\n"
    ));
}

#[test]
fn response_tables_stop_at_cycles() {
    let markdown = library_docs(&Configuration::default());
    assert!(markdown.contains(
        "|books|Array\\<Book\\>|No|Books matching a filter|\n\
         |-title|String|Yes||\n\
         |-status|Status|Yes|AVAILABLE: AVAILABLE Available to borrow;LENT: LENT|\n\
         |-price|Float|No||\n\
         |-author|Author|No||\n\
         |--name|String|No||\n\
         |--books|Array\\<Book\\>|No||\n"
    ));
}

#[test]
fn queries_skip_enums_and_cycles() {
    let markdown = library_docs(&Configuration::default());
    assert!(markdown.contains(
        r#""query": "query search($filter: BookFilter, $first: Int) {\n  data: books(filter: $filter, first: $first) { title price author { name } }\n}","#
    ));
    assert!(markdown.contains(r#""query": "query search {\n  data: healthy\n}","#));
    // an object whose only field is an enum selects nothing
    assert!(markdown.contains(r#""query": "query search {\n  data: shelf\n}","#));
}

#[test]
fn examples_use_first_enum_value_and_single_element_lists() {
    let markdown = library_docs(&Configuration {
        json_indent: 0,
        ..Configuration::default()
    });
    assert!(markdown.contains(
        "\"variables\": {\n\"filter\": {\n\"status\": \"AVAILABLE\",\n\"authors\": [\n\"String\"\n]\n},\n\"first\": 1\n}"
    ));
    assert!(markdown.contains(
        "\"data\": [\n{\n\"title\": \"String\",\n\"status\": \"AVAILABLE\",\n\"price\": 1.1,\n\"author\": {\n\"name\": \"String\"\n}\n}\n]"
    ));
}

#[test]
fn configuration_shapes_the_document() {
    let markdown = library_docs(&Configuration {
        endpoint: "https://books.example/graphql".to_owned(),
        operation_name: "Library".to_owned(),
        depth_marker: '>',
        preamble: false,
        ..Configuration::default()
    });
    assert!(!markdown.contains("## Calling convention"));
    assert!(markdown.starts_with("\n### Books matching a filter\n"));
    assert!(markdown.contains("#### Endpoint https://books.example/graphql"));
    assert!(markdown.contains("|>>status|Status|No|"));
    assert!(markdown.contains(r#""query": "query Library("#));
}

#[test]
fn authentication_section_is_optional() {
    let markdown = library_docs(&Configuration {
        authentication: Some("Pass the session id as a cookie.\n".to_owned()),
        ..Configuration::default()
    });
    assert!(markdown.contains(
        "### Authentication\nPass the session id as a cookie.\n### Parameters\n"
    ));
}

#[test]
fn invalid_schemas_are_reported() {
    let error = generate_docs("type Query { broken: Nope }", &Configuration::default())
        .unwrap_err();
    assert!(matches!(error, DocsError::InvalidSchema(_)), "{error:?}");
    assert!(error.to_string().starts_with("invalid schema: "));
}

//! Entity-store schematic
//!
//! Renders the boilerplate TypeScript source for an Akita `EntityStore`
//! class. Rendering is straight-line substitution with explicit branches;
//! it performs no validation of its own and never touches the filesystem.

use tracing::debug;

use crate::{
    error::SchematicsError,
    models::{EntityStoreOptions, GeneratedFile},
    naming::{classify, dasherize, singularize},
};

/// Renders Akita entity-store boilerplate from invocation parameters
pub struct EntityStoreSchematic;

impl EntityStoreSchematic {
    /// Render the store class source for the given options
    ///
    /// Pure and deterministic: identical options yield byte-identical
    /// output. The `name` option appears verbatim in the `@StoreConfig`
    /// decorator; the generated identifiers use its classified, singularized
    /// form, so `"users"` yields `UserState` and `UserStore` while the store
    /// keeps the collection name `'users'`.
    pub fn render(options: &EntityStoreOptions) -> String {
        let entity = singularize(&classify(&options.name));
        let model_file = singularize(&dasherize(&options.name));

        // Exactly two output forms: the fragment is present in both the
        // import list and the extension clause, or in neither, with no
        // whitespace artifact in the absent form.
        let active = if options.with_active {
            ", ActiveState"
        } else {
            ""
        };

        format!(
            "import {{ Injectable }} from '@angular/core';
import {{ EntityState{active}, EntityStore, StoreConfig }} from '@datorama/akita';
import {{ {entity} }} from './{model_file}.model';

export interface {entity}State extends {extension}{active} {{}}

@Injectable({{ providedIn: 'root' }})
@StoreConfig({{ name: '{name}' }})
export class {entity}Store extends EntityStore<{entity}State> {{

  constructor() {{
    super();
  }}

}}
",
            active = active,
            entity = entity,
            model_file = model_file,
            extension = options.extension_state,
            name = options.name,
        )
    }

    /// Derive the conventional file name for the rendered store
    ///
    /// The dasherized feature name with the fixed `.store.ts` suffix.
    /// Where the file lands is the caller's decision.
    pub fn file_name(options: &EntityStoreOptions) -> String {
        format!("{}.store.ts", dasherize(&options.name))
    }

    /// Render the store and bundle it with its conventional path
    pub fn generate(options: &EntityStoreOptions) -> GeneratedFile {
        debug!("Generating entity store for feature: {}", options.name);

        GeneratedFile {
            path: Self::file_name(options),
            content: Self::render(options),
            language: "typescript".to_string(),
        }
    }

    /// Entry point for an invoking tool supplying a raw parameter bag
    ///
    /// The bag must carry `name` and `extensionState`; `withActive` defaults
    /// to false. Unrecognized keys are rejected.
    pub fn generate_from_value(params: serde_json::Value) -> Result<GeneratedFile, SchematicsError> {
        let options: EntityStoreOptions = serde_json::from_value(params)?;
        Ok(Self::generate(&options))
    }
}

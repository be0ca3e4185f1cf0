use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use autoimport_core::{
    DirectiveResolver, IgnoreRule, ImportInfo, LegacyImportInfo, MapResolver, ResolutionCache,
    ResolverKind, ResolverOutput, SideEffects, TransformError, TransformOptions, transform,
    transform_with_cache,
};
use regex::Regex;

fn vue() -> TransformOptions {
    TransformOptions::new()
        .with_import("ref", ImportInfo::named("vue", "ref"))
        .with_import("computed", ImportInfo::named("vue", "computed"))
        .with_import("watch", ImportInfo::named("vue", "watch"))
        .with_import("vueRef", ImportInfo::named("vue", "ref"))
}

async fn output(code: &str, options: &TransformOptions) -> Option<String> {
    transform(code, "test.js", options)
        .await
        .unwrap()
        .map(|result| result.code)
}

#[tokio::test]
async fn no_free_identifiers_means_no_change() {
    assert_eq!(output("", &vue()).await, None);
    assert_eq!(output("const a = 1;\n", &vue()).await, None);
    assert_eq!(output("unknown(1)\n", &vue()).await, None);
}

#[tokio::test]
async fn literals_and_comments_are_not_scanned() {
    let code = "const s = \"ref\"\nconst t = `computed`\n// watch it\n/* ref */\nconst r = /ref/g\n";
    assert_eq!(output(code, &vue()).await, None);
}

#[tokio::test]
async fn template_interpolations_are_scanned() {
    let code = "const s = `count: ${ref(0)}`\n";
    assert_eq!(
        output(code, &vue()).await.as_deref(),
        Some("import { ref } from 'vue';const s = `count: ${ref(0)}`\n")
    );
}

#[tokio::test]
async fn declared_functions_are_not_imported() {
    let options = TransformOptions::new()
        .with_import("foo", ImportInfo::default_export("foo"))
        .with_import("bar", ImportInfo::default_export("bar"));
    let code = "function foo(){ return bar }\n";

    assert_eq!(
        output(code, &options).await.as_deref(),
        Some("import { default as bar } from 'bar';function foo(){ return bar }\n")
    );
}

#[tokio::test]
async fn destructured_names_are_local() {
    let options = TransformOptions::new()
        .with_import("a", ImportInfo::default_export("a"))
        .with_import("c", ImportInfo::default_export("c"))
        .with_import("x", ImportInfo::named("store", "x"));
    let code = "const { a, b: c } = x\n";

    assert_eq!(
        output(code, &options).await.as_deref(),
        Some("import { x } from 'store';const { a, b: c } = x\n")
    );
}

#[tokio::test]
async fn imported_names_are_local() {
    let code = "import { ref } from 'vue'\nconst a = ref(0)\nwatch(a, f)\n";
    assert_eq!(
        output(code, &vue()).await.as_deref(),
        Some("import { watch } from 'vue';import { ref } from 'vue'\nconst a = ref(0)\nwatch(a, f)\n")
    );
}

#[tokio::test]
async fn cache_wins_over_imports_and_resolvers() {
    let seen = Arc::new(std::sync::Mutex::new(Vec::new()));
    let log = seen.clone();
    let options = TransformOptions::new()
        .with_import("ref", ImportInfo::named("vue", "ref"))
        .with_resolver(move |name: String| {
            log.lock().unwrap().push(name);
            async move { Ok::<Option<ResolverOutput>, anyhow::Error>(None) }
        });

    let mut cache = ResolutionCache::new();
    cache.insert("ref", ImportInfo::named("cached", "ref"));

    let result = transform_with_cache("ref(1)\n", "a.js", &options, &mut cache)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(result.code, "import { ref } from 'cached';ref(1)\n");
    // Only the unresolvable `1` reaches the resolver.
    assert_eq!(*seen.lock().unwrap(), ["1"]);
}

#[tokio::test]
async fn resolver_results_populate_shared_cache() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = calls.clone();
    let options = TransformOptions::new().with_resolver(move |name: String| {
        counter.fetch_add(1, Ordering::SeqCst);
        async move {
            let output = (name == "Button").then(|| ResolverOutput::from("ui/button"));
            Ok::<_, anyhow::Error>(output)
        }
    });

    let mut cache = ResolutionCache::new();
    for id in ["a.js", "b.js"] {
        let result = transform_with_cache("Button()\n", id, &options, &mut cache)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(
            result.code,
            "import { default as Button } from 'ui/button';Button()\n"
        );
    }

    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_eq!(cache.get("Button"), Some(&ImportInfo::default_export("ui/button")));
}

#[tokio::test]
async fn side_effects_are_always_injected() {
    let options = TransformOptions::new().with_import(
        "Button",
        ImportInfo::named("ui", "Button").with_side_effects(SideEffects::from("polyfill")),
    );

    assert_eq!(
        output("Button()\n", &options).await.as_deref(),
        Some("import { Button } from 'ui';import 'polyfill';Button()\n")
    );
}

#[tokio::test]
async fn same_module_bindings_are_grouped_in_order() {
    let code = "const a = watch(computed(ref))\n";
    assert_eq!(
        output(code, &vue()).await.as_deref(),
        Some("import { watch, computed, ref } from 'vue';const a = watch(computed(ref))\n")
    );
}

#[tokio::test]
async fn alias_rendered_only_when_names_differ() {
    assert_eq!(
        output("vueRef(1)\n", &vue()).await.as_deref(),
        Some("import { ref as vueRef } from 'vue';vueRef(1)\n")
    );
}

#[tokio::test]
async fn namespace_imports() {
    let options = TransformOptions::new().with_import("lib", ImportInfo::namespace("lib"));
    assert_eq!(
        output("lib.run()\n", &options).await.as_deref(),
        Some("import * as lib from 'lib';lib.run()\n")
    );
}

#[tokio::test]
async fn ignore_names_and_patterns() {
    let options = vue()
        .with_ignore(IgnoreRule::name("ref"))
        .with_ignore(IgnoreRule::from(Regex::new("^comp").unwrap()));

    assert_eq!(output("ref(1)\ncomputed(f)\n", &options).await, None);
    assert_eq!(
        output("ref(1)\nwatch(f)\n", &options).await.as_deref(),
        Some("import { watch } from 'vue';ref(1)\nwatch(f)\n")
    );
}

#[tokio::test]
async fn source_map_is_gated() {
    let code = "ref(1)\n";
    let without = transform(code, "a.js", &vue()).await.unwrap().unwrap();
    assert_eq!(without.map, None);

    let with = transform(code, "src/a.js", &vue().with_source_map(true))
        .await
        .unwrap()
        .unwrap();
    let map = with.map.unwrap();
    assert_eq!(map.sources, ["src/a.js"]);
    assert_eq!(map.sources_content, [Some(code.to_string())]);
    // 26 columns of prefix on the first line.
    assert_eq!(map.mappings, "0BAAA");
}

#[tokio::test]
async fn legacy_records_match_canonical_records() {
    let legacy = MapResolver::with_entries(
        ResolverKind::Component,
        [(
            "x".to_string(),
            ResolverOutput::from(LegacyImportInfo {
                path: "lib".to_string(),
                name: Some("x".to_string()),
                import_name: Some("y".to_string()),
                side_effects: None,
            }),
        )],
    );
    let canonical = MapResolver::with_entries(
        ResolverKind::Component,
        [(
            "x".to_string(),
            ResolverOutput::from(ImportInfo {
                from: "lib".to_string(),
                name: Some("y".to_string()),
                alias: Some("x".to_string()),
                side_effects: None,
            }),
        )],
    );

    let a = output("x()\n", &TransformOptions::new().with_resolver(legacy)).await;
    let b = output("x()\n", &TransformOptions::new().with_resolver(canonical)).await;
    assert_eq!(a, b);
    assert_eq!(a.as_deref(), Some("import { y as x } from 'lib';x()\n"));
}

#[tokio::test]
async fn directive_resolvers_receive_unprefixed_names() {
    let directive_seen = Arc::new(std::sync::Mutex::new(Vec::new()));
    let component_seen = Arc::new(std::sync::Mutex::new(Vec::new()));
    let directive_log = directive_seen.clone();
    let component_log = component_seen.clone();
    let options = TransformOptions::new()
        .with_resolver(DirectiveResolver(move |name: String| {
            directive_log.lock().unwrap().push(name.clone());
            async move {
                let output = (name == "Focus").then(|| ResolverOutput::from("directives/focus"));
                Ok::<_, anyhow::Error>(output)
            }
        }))
        .with_resolver(move |name: String| {
            component_log.lock().unwrap().push(name);
            async move { Ok::<Option<ResolverOutput>, anyhow::Error>(None) }
        });

    let out = output("_resolveDirective(vFocus, value)\n", &options).await;
    assert_eq!(
        out.as_deref(),
        Some("import { default as vFocus } from 'directives/focus';_resolveDirective(vFocus, value)\n")
    );
    assert_eq!(*directive_seen.lock().unwrap(), ["Focus", "alue"]);
    // Resolvers after a directive match keep seeing the stripped name.
    assert_eq!(*component_seen.lock().unwrap(), ["_resolveDirective", "alue"]);
}

#[tokio::test]
async fn component_resolver_after_directive_gets_stripped_name() {
    let components = MapResolver::with_entries(
        ResolverKind::Component,
        [("Tooltip".to_string(), ResolverOutput::from("ui/tooltip"))],
    );
    let options = TransformOptions::new()
        .with_resolver(DirectiveResolver(MapResolver::new(ResolverKind::Component)))
        .with_resolver(components);

    assert_eq!(
        output("use(vTooltip)\n", &options).await.as_deref(),
        Some("import { default as vTooltip } from 'ui/tooltip';use(vTooltip)\n")
    );
}

#[tokio::test]
async fn record_without_origin_is_skipped() {
    let options = TransformOptions::new().with_import(
        "thing",
        ImportInfo {
            from: String::new(),
            name: Some("thing".to_string()),
            ..Default::default()
        },
    );

    assert_eq!(output("thing()\n", &options).await, None);

    let resolved = TransformOptions::new().with_resolver(MapResolver::with_entries(
        ResolverKind::Component,
        [("thing".to_string(), ResolverOutput::from(ImportInfo::default()))],
    ));
    let mut cache = ResolutionCache::new();
    let result = transform_with_cache("thing()\n", "a.js", &resolved, &mut cache)
        .await
        .unwrap();
    assert_eq!(result, None);
    // The empty record is still remembered for the name.
    assert_eq!(cache.get("thing"), Some(&ImportInfo::default()));
}

#[tokio::test]
async fn resolver_errors_abort_the_transform() {
    let options = TransformOptions::new().with_resolver(|name: String| async move {
        Err::<Option<ResolverOutput>, _>(anyhow::anyhow!("no network for {name}"))
    });

    let err = transform("Thing()\n", "a.js", &options).await.unwrap_err();
    match err {
        TransformError::Resolver { name, source } => {
            assert_eq!(name, "Thing");
            assert_eq!(source.to_string(), "no network for Thing");
        }
        other => panic!("unexpected error: {other}"),
    }
}

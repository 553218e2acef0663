// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! The annotated configuration written by `cg init`.

/// Generate an example configuration file.
pub fn example_config() -> &'static str {
    r#"# cg configuration file
# SPDX-License-Identifier: MIT

# Commit type classification.
# Built-in rules (checked after the ones below, in this order):
#   test  -> test/, .test., .spec., __tests__/, tests/
#   docs  -> .md, docs/, README, CHANGELOG
#   ci    -> .github/, .gitlab-ci, .circleci/, jenkinsfile, .travis
#   build -> package.json, lock files, Gemfile, requirements.txt, pom.xml,
#            build.gradle, Makefile, Dockerfile, docker-compose
#   style -> .prettierrc, .eslintrc, .editorconfig
[classify]
default_type = "feat"

# Extra rules are regular expressions, matched case-insensitively
# anywhere in the path. The first matching rule wins. For example:
#
# [[classify.rules]]
# type = "perf"
# patterns = ["bench/", "benches/"]
#
# [[classify.rules]]
# type = "chore"
# patterns = ["^scripts/", "\\.gitignore$"]

# Scope extraction.
# src, lib, app, components, pages, api, tests, test and __tests__ are
# always skipped; list more generic directory names in `skip`.
[scope]
# skip = ["crates", "packages"]
fallback = "core"

# Report output.
[report]
color = true
examples = true
recommendations = true
"#
}

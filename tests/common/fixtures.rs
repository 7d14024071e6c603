//! Registry and project fixtures.

use std::path::Path;

use serde_json::{json, Value};

pub const STYLE: &str = "new-york";

pub const UTILS_TS: &str = r#"import { clsx, type ClassValue } from "clsx"
import { twMerge } from "tailwind-merge"

export function cn(...inputs: ClassValue[]) {
  return twMerge(clsx(inputs))
}
"#;

pub const BUTTON_TSX: &str = r#"import * as React from "react"
import { Slot } from "@radix-ui/react-slot"

import { cn } from "@/registry/new-york/lib/utils"

export function Button({ className, ...props }: React.ComponentProps<"button">) {
  return <button className={cn("inline-flex rounded-md", className)} {...props} />
}
"#;

pub const CARD_TSX: &str = r#"import { cn } from "@/registry/new-york/lib/utils"
import { Button } from "@/registry/new-york/ui/button"

export function Card() {
  return <div className={cn("rounded-xl border")}><Button /></div>
}
"#;

/// Minimal project config with a global stylesheet.
pub const PROJECT_CONFIG: &str = r#"style = "new-york"

[tailwind]
css = "app/globals.css"
base_color = "neutral"
"#;

pub const GLOBALS_CSS: &str = "@tailwind base;\n@tailwind components;\n@tailwind utilities;\n";

/// `index.json`: entries list their files without content.
pub fn index() -> Value {
    json!([
        {
            "name": "index",
            "type": "registry:style",
            "dependencies": ["tailwindcss-animate"],
            "registryDependencies": ["utils"]
        },
        {"name": "new-york", "type": "registry:style"},
        {
            "name": "neutral",
            "type": "registry:style",
            "cssVars": {
                "light": {"background": "0 0% 100%", "foreground": "0 0% 3.9%"},
                "dark": {"background": "0 0% 3.9%", "foreground": "0 0% 98%"}
            }
        },
        {
            "name": "utils",
            "type": "registry:lib",
            "dependencies": ["clsx", "tailwind-merge"],
            "files": [{"path": "lib/utils.ts", "type": "registry:lib"}]
        },
        {
            "name": "button",
            "type": "registry:ui",
            "dependencies": ["@radix-ui/react-slot"],
            "registryDependencies": ["utils"],
            "files": [{"path": "ui/button.tsx", "type": "registry:ui"}]
        },
        {
            "name": "card",
            "type": "registry:ui",
            "registryDependencies": ["button", "utils"],
            "files": [{"path": "ui/card.tsx", "type": "registry:ui"}],
            "cssVars": {"light": {"card": "0 0% 100%"}, "dark": {"card": "0 0% 3.9%"}}
        }
    ])
}

/// `styles/new-york/{name}.json` documents with inline content.
pub fn entry_documents() -> Vec<(&'static str, Value)> {
    vec![
        (
            "utils",
            json!({
                "name": "utils",
                "type": "registry:lib",
                "files": [{"path": "lib/utils.ts", "type": "registry:lib", "content": UTILS_TS}]
            }),
        ),
        (
            "button",
            json!({
                "name": "button",
                "type": "registry:ui",
                "files": [{"path": "ui/button.tsx", "type": "registry:ui", "content": BUTTON_TSX}]
            }),
        ),
        (
            "card",
            json!({
                "name": "card",
                "type": "registry:ui",
                "files": [{"path": "ui/card.tsx", "type": "registry:ui", "content": CARD_TSX}]
            }),
        ),
        ("index", json!({"name": "index", "type": "registry:style"})),
    ]
}

/// Lay the fixture registry out under `root`.
pub fn write_registry(root: &Path) {
    write_json(&root.join("index.json"), &index());
    for (name, doc) in entry_documents() {
        write_json(&root.join(format!("styles/{}/{}.json", STYLE, name)), &doc);
    }
}

fn write_json(path: &Path, value: &Value) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("Failed to create registry directories");
    }
    let text = serde_json::to_string_pretty(value).expect("Failed to serialize fixture");
    std::fs::write(path, text).expect("Failed to write registry fixture");
}

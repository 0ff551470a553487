use std::fmt::Write as _;
use std::path::Path;

use tracing::info;

use crate::error::ArtifactError;
use crate::model::catalog::GenerationRequest;
use crate::services::store;

/// Public URL prefix the icons are served under.
pub const ICON_URL_PREFIX: &str = "/icons";

const HEADER: &str = "// Generated Icon Component
// Replace emojis with these icon images

import React from 'react';

interface IconProps {
  name: string;
  className?: string;
  size?: number;
}

const iconMap: Record<string, string> = {
";

const FOOTER: &str = "};

export const PokerIcon: React.FC<IconProps> = ({ name, className = '', size = 24 }) => {
  const src = iconMap[name];

  if (!src) {
    console.warn(`Icon not found: ${name}`);
    return null;
  }

  return (
    <img
      src={src}
      alt={name}
      className={className}
      style={{ width: size, height: size }}
    />
  );
};

// Usage examples:
// <PokerIcon name=\"practice\" size={24} />
// <PokerIcon name=\"tutorial\" className=\"inline-block mr-2\" />

export default PokerIcon;
";

pub fn render_component(catalog: &[GenerationRequest]) -> String {
    let mut out = String::from(HEADER);
    for r in catalog {
        let _ = writeln!(
            out,
            "  {}: '{}/{}',",
            r.name, ICON_URL_PREFIX, r.destination_filename
        );
    }
    out.push_str(FOOTER);
    out
}

/// Overwrites `path` unconditionally.
pub fn emit_component(catalog: &[GenerationRequest], path: &Path) -> Result<(), ArtifactError> {
    store::write_atomic(path, render_component(catalog).as_bytes())?;
    info!(path = %path.display(), icons = catalog.len(), "wrote icon component");
    Ok(())
}

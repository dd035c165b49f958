// decorations for the polished variant only
//
// everything here is scoped under .polished so the classic variant renders the
// same markup flat
pub const POLISHED_STYLES: &str = r#"
.polished .gradient-text,
.polished .brand,
.polished .section-title h2 {
  background: linear-gradient(to right, var(--blue), var(--purple), var(--pink));
  -webkit-background-clip: text;
  background-clip: text;
  color: transparent;
}

.polished .section-title .title-rule,
.polished .nav-indicator,
.polished .mobile-nav-link.active,
.polished .btn-primary,
.polished .skill-fill {
  background: linear-gradient(to right, var(--blue), var(--purple), var(--pink));
}

.polished .app-header,
.polished .card,
.polished .mobile-menu {
  backdrop-filter: blur(16px);
}

.polished .hero-backdrop {
  position: absolute;
  inset: 0;
  overflow: hidden;
  pointer-events: none;
}

.polished .hero-blob {
  position: absolute;
  width: 384px;
  height: 384px;
  border-radius: var(--radius-full);
  filter: blur(64px);
  background: linear-gradient(to right, rgba(59, 130, 246, 0.2), rgba(168, 85, 247, 0.2));
  animation: float 6s ease-in-out infinite;
}

.polished .hero-blob.first {
  top: 25%;
  left: 25%;
}

.polished .hero-blob.second {
  bottom: 25%;
  right: 25%;
  animation-delay: 3s;
}

.polished .nav-indicator {
  animation: pulse 2s ease-in-out infinite;
}

.polished .skill-fill::after {
  content: "";
  position: absolute;
  inset: 0;
  background: linear-gradient(to right, transparent, rgba(255, 255, 255, 0.2), transparent);
  animation: shimmer 2s linear infinite;
}

.polished .project-card:hover {
  transform: translateY(-8px);
}

.polished .project-card:hover .project-image img {
  transform: scale(1.1);
}

.polished .avatar-glow {
  position: absolute;
  inset: 0;
  border-radius: var(--radius-full);
  background: linear-gradient(to right, var(--blue), var(--indigo));
  filter: blur(12px);
  opacity: 0.75;
  transform: rotate(45deg);
}

.polished .fade-in {
  animation: fadeIn 1s ease-out both;
}

.polished .mobile-menu {
  animation: slideDown var(--transition-slow) ease-out;
}

@keyframes float {
  0%, 100% { transform: translateY(0); }
  50% { transform: translateY(-20px); }
}

@keyframes pulse {
  0%, 100% { opacity: 1; }
  50% { opacity: 0.5; }
}

@keyframes shimmer {
  from { transform: translateX(-100%); }
  to { transform: translateX(100%); }
}

@keyframes fadeIn {
  from { opacity: 0; transform: translateY(16px); }
  to { opacity: 1; transform: none; }
}

@keyframes slideDown {
  from { opacity: 0; transform: translateY(-8px); }
  to { opacity: 1; transform: none; }
}
"#;

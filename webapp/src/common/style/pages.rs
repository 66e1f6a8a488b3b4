pub const PAGE_STYLES: &str = r#"
/* Page sections */
.page {
  min-height: 100vh;
  background-color: var(--forest);
  color: var(--stone-100);
}

.container {
  max-width: var(--container-width);
  margin: 0 auto;
  padding: 0 var(--space-6);
}

.section {
  padding: var(--space-20) var(--space-6);
}

.section-moss {
  background-color: var(--moss);
}

.section-forest-light {
  background-color: var(--forest-light);
}

.section-bark {
  background-color: var(--bark);
}

.section-title {
  font-size: 1.875rem;
  font-weight: 700;
  color: var(--amberwood);
  margin-bottom: var(--space-4);
}

.section-title.centered {
  text-align: center;
  margin-bottom: var(--space-10);
}

.lede {
  color: var(--stone-300);
  line-height: 1.625;
}

.muted {
  color: var(--stone-400);
}

/* Hero banners; the background image is set inline so it picks up the base path */
.hero {
  position: relative;
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  text-align: center;
  padding: 8rem var(--space-6);
  background-size: cover;
  background-position: center;
  background-attachment: fixed;
}

.hero::before {
  content: "";
  position: absolute;
  inset: 0;
  background-color: var(--overlay-deep);
}

.hero.hero-tall {
  padding: 10rem var(--space-6);
}

.hero.hero-tall::before {
  background-color: var(--overlay);
}

.hero-content {
  position: relative;
  z-index: 10;
  max-width: 48rem;
  margin: 0 auto;
}

.hero-logo {
  margin: 0 auto var(--space-4);
}

.hero-title {
  font-size: 3rem;
  font-weight: 800;
  letter-spacing: -0.025em;
  color: var(--amberwood);
  margin-bottom: var(--space-4);
  text-shadow: 0 4px 6px rgba(0, 0, 0, 0.5);
}

.hero-subtitle {
  font-size: 1.125rem;
  color: var(--stone-300);
  max-width: 42rem;
  margin: 0 auto;
}

.hero-actions {
  margin-top: var(--space-8);
  display: flex;
  flex-wrap: wrap;
  justify-content: center;
  gap: var(--space-4);
}

@media (min-width: 768px) {
  .hero-title {
    font-size: 3.75rem;
  }

  .hero-subtitle {
    font-size: 1.25rem;
  }
}

/* Grids */
.card-grid {
  display: grid;
  gap: var(--space-10);
}

.split {
  display: grid;
  gap: var(--space-12);
  align-items: center;
}

.split.top {
  align-items: start;
}

@media (min-width: 640px) {
  .card-grid {
    grid-template-columns: repeat(2, minmax(0, 1fr));
  }
}

@media (min-width: 768px) {
  .split {
    grid-template-columns: repeat(2, minmax(0, 1fr));
  }
}

@media (min-width: 1024px) {
  .card-grid {
    grid-template-columns: repeat(3, minmax(0, 1fr));
  }
}

/* Home */
.feature-image {
  width: 100%;
  height: 16rem;
  object-fit: cover;
}

.feature-body {
  padding: var(--space-6);
}

.feature-body p {
  margin-top: var(--space-2);
  color: var(--stone-400);
}

.view-all {
  text-align: center;
  margin-top: var(--space-12);
}

.view-all a {
  color: var(--amberwood);
  text-decoration: underline;
}

.mission {
  text-align: center;
}

.mission .section-title {
  font-size: 1.5rem;
  font-weight: 600;
}

.mission p {
  max-width: 48rem;
  margin: 0 auto;
  color: var(--stone-300);
}

/* About */
.story-image {
  position: relative;
  width: 100%;
  height: 20rem;
  border-radius: var(--radius-2xl);
  overflow: hidden;
  box-shadow: var(--shadow-lg);
}

.story-image img {
  width: 100%;
  height: 100%;
  object-fit: cover;
}

.value-card {
  padding: var(--space-6);
  text-align: center;
}

.value-card .card-title {
  margin-bottom: var(--space-2);
}

.value-card p {
  color: var(--stone-300);
}

.cta {
  text-align: center;
}

.cta-inner {
  max-width: 48rem;
  margin: 0 auto;
}

.cta-inner p {
  color: var(--stone-300);
  margin-bottom: var(--space-8);
}

/* Contact */
.channel-list {
  list-style: none;
  display: flex;
  flex-direction: column;
  gap: var(--space-4);
}

.channel {
  display: flex;
  align-items: center;
  gap: var(--space-3);
}

.channel svg {
  color: var(--amberwood);
}

.channel a:hover {
  color: var(--amberwood);
}

.hours {
  margin-top: var(--space-6);
  font-size: 0.875rem;
  color: var(--stone-400);
}

.contact-form {
  background-color: var(--bark);
  padding: var(--space-8);
  border-radius: var(--radius-2xl);
  box-shadow: var(--shadow-lg);
  display: flex;
  flex-direction: column;
  gap: var(--space-6);
}

.contact-form h2 {
  font-size: 1.5rem;
  font-weight: 600;
  color: var(--amberwood);
}

/* Not found */
.lost {
  text-align: center;
  padding: 10rem var(--space-6);
}

.lost code {
  color: var(--stone-400);
}

.lost .hero-actions {
  margin-top: var(--space-6);
}
"#;
